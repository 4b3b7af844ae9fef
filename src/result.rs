//! Outcome of a single play.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::MAX_SCORE;

/// Result of one completed play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    /// Damage dealt by the final score.
    pub damage_done: u32,
    /// Final accumulated score.
    pub score: u32,
    /// Cards drawn, in draw order.
    pub drawn: Vec<Card>,
}

impl PlayResult {
    /// Returns whether the final score overshot the ceiling.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.score > MAX_SCORE
    }
}
