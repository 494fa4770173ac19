//! Board representation for N×N tic-tac-toe

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, EmptyCells, Placement};

/// Largest supported board edge
pub const MAX_BOARD_SIZE: usize = 16;

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Maximizing side, rendered as `O`
    Computer,
    /// Minimizing side, rendered as `X`
    Human,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Computer => Player::Human,
            Player::Human => Player::Computer,
        }
    }

    /// +1 for Computer, -1 for Human. Line sums are built from these.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::Computer => 1,
            Player::Human => -1,
        }
    }
}

/// Content of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Computer,
    Human,
}

impl Cell {
    /// Signed contribution of this cell to a line sum
    #[inline]
    pub fn value(self) -> i32 {
        self.owner().map_or(0, Player::sign)
    }

    /// Player whose mark is in this cell
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Computer => Some(Player::Computer),
            Cell::Human => Some(Player::Human),
        }
    }

    /// Same cell with the marks exchanged
    #[inline]
    pub fn swapped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Computer => Cell::Human,
            Cell::Human => Cell::Computer,
        }
    }

    /// Character used by the terminal rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Computer => 'O',
            Cell::Human => 'X',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Computer => Cell::Computer,
            Player::Human => Cell::Human,
        }
    }
}

/// Position on the board. A move is the `Pos` of an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}
