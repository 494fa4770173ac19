//! Search configuration: board size, winning run length and depth limit

use crate::board::MAX_BOARD_SIZE;
use crate::error::ConfigError;

/// How the evaluator looks for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Run length equals board size: only full rows, columns and the two
    /// main diagonals can win.
    FullLine,
    /// Run length shorter than the board: any window of `run_length`
    /// consecutive cells in one of four directions can win.
    Window,
}

/// Named configurations matching the classic board variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Preset {
    /// 3×3, three in a row, depth 7 (solves the game)
    #[default]
    Classic,
    /// 4×4, four in a row, depth 5
    Four,
    /// 7×7, five in a row, depth 2
    Gomoku7,
}

/// Parameters that fix evaluator regime and search cost for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Board edge length N
    pub size: usize,
    /// Marks in a row needed to win (L ≤ N)
    pub run_length: usize,
    /// Deepest recursion level still searched; deeper calls score 0
    pub max_depth: u8,
    /// Score positions where no line can still be completed as draws
    pub early_draw: bool,
    /// Worker threads for root analysis
    pub threads: usize,
}

impl SearchConfig {
    /// Create a single-threaded configuration without early-draw detection.
    /// Call [`validate`](Self::validate) before use.
    #[must_use]
    pub const fn new(size: usize, run_length: usize, max_depth: u8) -> Self {
        Self {
            size,
            run_length,
            max_depth,
            early_draw: false,
            threads: 1,
        }
    }

    /// Classic tic-tac-toe
    #[must_use]
    pub const fn classic() -> Self {
        Self::new(3, 3, 7)
    }

    #[must_use]
    pub const fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Classic => Self::classic(),
            Preset::Four => Self::new(4, 4, 5),
            Preset::Gomoku7 => Self::new(7, 5, 2),
        }
    }

    #[must_use]
    pub const fn with_early_draw(mut self, enabled: bool) -> Self {
        self.early_draw = enabled;
        self
    }

    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Evaluator regime implied by size and run length
    #[must_use]
    pub fn regime(&self) -> Regime {
        if self.run_length == self.size {
            Regime::FullLine
        } else {
            Regime::Window
        }
    }

    /// Check that the parameters are consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(ConfigError::BoardSize {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.run_length == 0 {
            return Err(ConfigError::ZeroRunLength);
        }
        if self.run_length > self.size {
            return Err(ConfigError::RunLengthTooLong {
                run_length: self.run_length,
                size: self.size,
            });
        }
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::classic()
    }
}
