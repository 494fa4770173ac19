//! Game rules for N×N tic-tac-toe
//!
//! This module implements:
//! - Window enumeration (every run of `L` cells in four directions)
//! - Win conditions (full lines on small boards, runs on large boards)
//! - Dead-position detection (no line can be completed any more)

pub mod dead;
pub mod win;

// Re-exports for convenient access
pub use dead::is_dead_position;
pub use win::{full_line_winner, window_winner, winner, Window, Windows, DIRECTIONS};
