//! A single push-your-luck play.

use alloc::vec::Vec;
use rand::Rng;

use crate::deck::Deck;
use crate::error::PlayError;
use crate::result::PlayResult;

mod scoring;

pub use scoring::{MAX_SCORE, applied_damage};

/// One play of the draw-while-safe game.
///
/// The game owns its deck exclusively. [`Game::play`] consumes the game, so a
/// deck is drained by at most one play.
#[derive(Debug, Clone)]
pub struct Game {
    /// Damage dealt by a stop exactly on the ceiling.
    max_damage: u32,
    /// Cards to draw from.
    deck: Deck,
}

impl Game {
    /// Creates a game over the given deck.
    #[must_use]
    pub const fn new(max_damage: u32, deck: Deck) -> Self {
        Self { max_damage, deck }
    }

    /// Creates a game over a freshly shuffled standard deck.
    ///
    /// # Example
    ///
    /// ```
    /// use damage_probabilities::Game;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let result = Game::standard(10, &mut rng).play().unwrap();
    /// assert!(result.score >= 12);
    /// ```
    #[must_use]
    pub fn standard<R: Rng + ?Sized>(max_damage: u32, rng: &mut R) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        Self::new(max_damage, deck)
    }

    /// Returns the configured maximum damage.
    #[must_use]
    pub const fn max_damage(&self) -> u32 {
        self.max_damage
    }

    /// Returns the deck the game will draw from.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Plays the game to completion.
    ///
    /// Cards are drawn while the score is below [`MAX_SCORE`] and stopping
    /// would deal no damage. The play ends on the first score that either
    /// busts or would deal damage.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::DeckExhausted`] if the deck runs out before the
    /// play ends. This cannot happen with a standard deck.
    pub fn play(mut self) -> Result<PlayResult, PlayError> {
        let mut score: u32 = 0;
        let mut drawn = Vec::new();

        while score < MAX_SCORE && applied_damage(score, self.max_damage) == 0 {
            let card = self
                .deck
                .draw()
                .map_err(|source| PlayError::DeckExhausted {
                    score,
                    drawn: drawn.len(),
                    source,
                })?;
            score += u32::from(card.value());
            drawn.push(card);
        }

        Ok(PlayResult {
            damage_done: applied_damage(score, self.max_damage),
            score,
            drawn,
        })
    }
}
