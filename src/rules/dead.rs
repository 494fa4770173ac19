//! Dead-position detection
//!
//! A position is dead when every line that could win already holds a mark
//! of each player. Nobody can complete a line from there, so the game is a
//! draw however it continues.

use crate::board::{Board, Cell};

use super::win::Windows;

/// True iff no window of `run_length` cells is still free of one player's marks.
pub fn is_dead_position(board: &Board, run_length: usize) -> bool {
    Windows::new(board.size(), run_length).all(|window| {
        let mut computer = false;
        let mut human = false;
        for pos in window.cells() {
            match board.get(pos) {
                Cell::Computer => computer = true,
                Cell::Human => human = true,
                Cell::Empty => {}
            }
        }
        computer && human
    })
}
