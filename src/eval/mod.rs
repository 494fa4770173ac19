//! Evaluation module
//!
//! Maps a board to a win/draw/loss score from the Computer's side:
//! positive favors Computer, negative favors Human, zero is neutral.

pub mod evaluate;
pub mod score;

pub use evaluate::evaluate;
pub use score::{OutcomeScore, Score};
