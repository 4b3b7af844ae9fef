//! A push-your-luck damage simulator with optional `no_std` support.
//!
//! The crate provides a [`Game`] that draws from a [`Deck`] while stopping
//! would still deal no damage, and a [`Simulation`] that plays many games
//! and tallies the damage outcomes into a [`DamageTable`].
//!
//! # Example
//!
//! ```
//! use damage_probabilities::{Simulation, SimulationOptions};
//!
//! let options = SimulationOptions::default().with_iterations(10_000);
//! let table = Simulation::new(options, 42).run().unwrap();
//! for frequency in table.frequencies() {
//!     println!("{frequency}");
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod simulation;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DrawError, PlayError, SimulationError};
pub use game::{Game, MAX_SCORE, applied_damage};
pub use options::SimulationOptions;
pub use result::PlayResult;
pub use simulation::{DamageFrequency, DamageTable, Simulation};
