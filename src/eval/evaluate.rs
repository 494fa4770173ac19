//! Board evaluation for both winning regimes

use crate::board::{Board, Player};
use crate::config::SearchConfig;
use crate::rules::winner;

use super::score::{OutcomeScore, Score};

/// Evaluate the board from the Computer's side.
///
/// Returns [`OutcomeScore::WIN`] if Computer owns a winning line,
/// [`OutcomeScore::LOSS`] if Human does, and [`OutcomeScore::DRAW`]
/// otherwise. Fullness is not considered here.
#[must_use]
pub fn evaluate(board: &Board, config: &SearchConfig) -> Score {
    match winner(board, config) {
        Some(Player::Computer) => OutcomeScore::WIN,
        Some(Player::Human) => OutcomeScore::LOSS,
        None => OutcomeScore::DRAW,
    }
}
