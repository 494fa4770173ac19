//! Outcome scores

/// Search and evaluation score. Positive favors Computer.
pub type Score = i32;

/// Terminal outcome values.
///
/// Every configuration scales outcomes by the same factor, so a decided
/// line always outranks the neutral 0 returned at the depth cutoff.
pub struct OutcomeScore;

impl OutcomeScore {
    /// Multiplier applied to the unit outcome
    pub const SCALE: Score = 10;
    /// Computer has a completed line
    pub const WIN: Score = Self::SCALE;
    /// Human has a completed line
    pub const LOSS: Score = -Self::SCALE;
    /// No completed line (drawn, undecided, or cut off)
    pub const DRAW: Score = 0;

    /// True for a win or loss value
    #[inline]
    pub fn is_decisive(score: Score) -> bool {
        score != Self::DRAW
    }
}
