/// Errors that can occur when building a search configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {size} outside 1..={max}")]
    BoardSize { size: usize, max: usize },

    #[error("run length must be at least 1")]
    ZeroRunLength,

    #[error("run length {run_length} exceeds board size {size}")]
    RunLengthTooLong { run_length: usize, size: usize },

    #[error("thread count must be at least 1")]
    ZeroThreads,
}

/// Errors for a move typed at the terminal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("expected two numbers as 'row col', got {0:?}")]
    Parse(String),

    #[error("({row}, {col}) is off the {size}x{size} board")]
    OutOfBounds { row: i64, col: i64, size: usize },

    #[error("({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,

    #[error("it is not the {0:?} player's turn")]
    OutOfTurn(crate::board::Player),
}
