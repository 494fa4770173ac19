//! Win condition checking
//!
//! Two regimes:
//! 1. Run length equals board size: sum each full row, column and both
//!    main diagonals
//! 2. Shorter run length: sum every window of `L` consecutive cells in the
//!    four directions, skipping windows that leave the board
//!
//! Cells are +1 for Computer and -1 for Human, so a line sum of ±L can only
//! come from `L` marks of the same player.

use crate::board::{Board, Player, Pos};
use crate::config::{Regime, SearchConfig};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Winner of the position, using the regime selected by `config`
#[inline]
pub fn winner(board: &Board, config: &SearchConfig) -> Option<Player> {
    match config.regime() {
        Regime::FullLine => full_line_winner(board),
        Regime::Window => window_winner(board, config.run_length),
    }
}

#[inline]
fn owner_of_sum(sum: i32, len: i32) -> Option<Player> {
    if sum == len {
        Some(Player::Computer)
    } else if sum == -len {
        Some(Player::Human)
    } else {
        None
    }
}

/// Check rows, columns and both full diagonals.
///
/// Row `i` and column `i` are tested together before moving to `i + 1`;
/// diagonals are tested last.
pub fn full_line_winner(board: &Board) -> Option<Player> {
    let n = board.size();
    let len = n as i32;
    let mut diag_sum = 0;
    let mut anti_diag_sum = 0;

    for i in 0..n {
        let mut row_sum = 0;
        let mut col_sum = 0;
        for j in 0..n {
            row_sum += board.cell(i, j).value();
            col_sum += board.cell(j, i).value();
        }
        if let Some(p) = owner_of_sum(row_sum, len) {
            return Some(p);
        }
        if let Some(p) = owner_of_sum(col_sum, len) {
            return Some(p);
        }
        diag_sum += board.cell(i, i).value();
        anti_diag_sum += board.cell(i, n - 1 - i).value();
    }

    owner_of_sum(diag_sum, len).or_else(|| owner_of_sum(anti_diag_sum, len))
}

/// Check every on-board window of `run_length` cells.
///
/// Stops at the first qualifying window; only existence matters.
pub fn window_winner(board: &Board, run_length: usize) -> Option<Player> {
    let len = run_length as i32;
    Windows::new(board.size(), run_length)
        .find_map(|window| owner_of_sum(window.sum(board), len))
}

/// A run of cells: start position, direction and length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Pos,
    pub dir: (i32, i32),
    pub len: usize,
}

impl Window {
    /// Positions covered by this window, from `start` outwards.
    ///
    /// # Panics
    ///
    /// Panics when a step leaves the coordinate range. Cells past the
    /// board's far edge are caught by [`Board::get`].
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        let (r0, c0) = (self.start.row as i32, self.start.col as i32);
        let (dr, dc) = self.dir;
        (0..self.len as i32).map(move |i| {
            let (r, c) = (r0 + dr * i, c0 + dc * i);
            match (u8::try_from(r), u8::try_from(c)) {
                (Ok(row), Ok(col)) => Pos::new(row, col),
                _ => panic!("window cell ({r}, {c}) is off the board"),
            }
        })
    }

    /// Signed sum of the window's cells
    #[inline]
    pub fn sum(&self, board: &Board) -> i32 {
        self.cells().map(|pos| board.get(pos).value()).sum()
    }
}

/// All windows of a given length that fit on an `size`×`size` board.
///
/// Order: start cells row-major, then [`DIRECTIONS`] order per cell.
#[derive(Debug, Clone)]
pub struct Windows {
    size: usize,
    len: usize,
    cell: usize,
    dir: usize,
}

impl Windows {
    pub fn new(size: usize, len: usize) -> Self {
        Self {
            size,
            len,
            cell: 0,
            dir: 0,
        }
    }

    #[inline]
    fn fits(&self, row: i32, col: i32, (dr, dc): (i32, i32)) -> bool {
        let n = self.size as i32;
        let span = self.len as i32 - 1;
        let end_row = row + dr * span;
        let end_col = col + dc * span;
        end_row >= 0 && end_row < n && end_col >= 0 && end_col < n
    }
}

impl Iterator for Windows {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.len == 0 {
            return None;
        }
        while self.cell < self.size * self.size {
            let row = (self.cell / self.size) as i32;
            let col = (self.cell % self.size) as i32;
            while self.dir < DIRECTIONS.len() {
                let dir = DIRECTIONS[self.dir];
                self.dir += 1;
                if self.fits(row, col, dir) {
                    return Some(Window {
                        start: Pos::new(row as u8, col as u8),
                        dir,
                        len: self.len,
                    });
                }
            }
            self.dir = 0;
            self.cell += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new(3);
        assert_eq!(full_line_winner(&board), None);
        assert_eq!(window_winner(&board, 3), None);
    }

    #[test]
    fn test_full_line_row_col_diag() {
        assert_eq!(
            full_line_winner(&Board::from_rows(&["...", "OOO", "X.X"])),
            Some(Player::Computer)
        );
        assert_eq!(
            full_line_winner(&Board::from_rows(&["X.O", "X.O", "X.."])),
            Some(Player::Human)
        );
        assert_eq!(
            full_line_winner(&Board::from_rows(&["O.X", ".OX", "..O"])),
            Some(Player::Computer)
        );
        assert_eq!(
            full_line_winner(&Board::from_rows(&["O.X", ".X.", "XO."])),
            Some(Player::Human)
        );
    }

    #[test]
    fn test_full_line_ignores_mixed_lines() {
        let board = Board::from_rows(&["OXO", "XOX", "XOX"]);
        assert_eq!(full_line_winner(&board), None);
    }

    #[test]
    fn test_window_run_of_five_on_seven() {
        let mut board = Board::new(7);
        for col in 1..5 {
            board.apply(Pos::new(3, col), Player::Computer);
        }
        assert_eq!(window_winner(&board, 5), None);
        board.apply(Pos::new(3, 5), Player::Computer);
        assert_eq!(window_winner(&board, 5), Some(Player::Computer));
    }

    #[test]
    fn test_window_anti_diagonal_at_edge() {
        let mut board = Board::new(7);
        for i in 0..5u8 {
            board.apply(Pos::new(2 + i, 6 - i), Player::Human);
        }
        assert_eq!(window_winner(&board, 5), Some(Player::Human));
    }

    #[test]
    fn test_window_broken_run() {
        let board = Board::from_rows(&[
            "OOOXO..",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);
        assert_eq!(window_winner(&board, 5), None);
        assert_eq!(window_winner(&board, 3), Some(Player::Computer));
    }

    #[test]
    fn test_window_count() {
        // 3×3, length 3: three rows, three columns, two diagonals
        assert_eq!(Windows::new(3, 3).count(), 8);
        // 7×7, length 5: 3 starts per line in each straight direction,
        // 3×3 starts for each diagonal direction
        assert_eq!(Windows::new(7, 5).count(), 7 * 3 * 2 + 9 * 2);
        assert_eq!(Windows::new(3, 4).count(), 0);
    }

    #[test]
    fn test_windows_stay_on_board() {
        for window in Windows::new(6, 4) {
            for pos in window.cells() {
                assert!(pos.row < 6 && pos.col < 6, "{window:?} leaves the board");
            }
        }
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_window_past_left_edge_panics() {
        let window = Window {
            start: Pos::new(0, 1),
            dir: (1, -1),
            len: 3,
        };
        let _ = window.sum(&Board::new(3));
    }

    #[test]
    #[should_panic(expected = "off the 3x3 board")]
    fn test_window_past_right_edge_panics() {
        let window = Window {
            start: Pos::new(1, 1),
            dir: (0, 1),
            len: 3,
        };
        let _ = window.sum(&Board::new(3));
    }

    #[test]
    fn test_winner_dispatches_on_regime() {
        let board = Board::from_rows(&["OOO.", "XX..", "X...", "...."]);
        assert_eq!(winner(&board, &SearchConfig::new(4, 4, 1)), None);
        assert_eq!(winner(&board, &SearchConfig::new(4, 3, 1)), Some(Player::Computer));
    }
}
