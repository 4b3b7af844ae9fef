//! Error types for deck, game and simulation operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The deck ran out before the stopping rule ended the play.
    #[error("deck exhausted at score {score} after {drawn} cards")]
    DeckExhausted {
        /// Score reached when the deck ran out.
        score: u32,
        /// Number of cards drawn before the deck ran out.
        drawn: usize,
        /// The failed draw.
        #[source]
        source: DrawError,
    },
}

/// Errors that can occur during a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A trial failed, aborting the run.
    #[error("trial {trial} failed")]
    Trial {
        /// Zero-based index of the failed trial.
        trial: usize,
        /// Why the trial failed.
        #[source]
        source: PlayError,
    },
}
