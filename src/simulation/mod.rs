//! Monte Carlo driver aggregating many plays.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{PlayError, SimulationError};
use crate::game::Game;
use crate::options::SimulationOptions;
use crate::result::PlayResult;

mod table;

pub use table::{DamageFrequency, DamageTable};

/// Runs independent games and tallies their damage.
///
/// Every trial builds and shuffles its own standard deck. All shuffles draw
/// from one seeded generator, so a given seed always yields the same table.
///
/// # Example
///
/// ```
/// use damage_probabilities::{Simulation, SimulationOptions};
///
/// let options = SimulationOptions::default().with_iterations(1_000);
/// let table = Simulation::new(options, 42).run().unwrap();
/// assert_eq!(table.total(), 1_000);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Simulation options.
    pub options: SimulationOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a simulation with the given seed.
    #[must_use]
    pub fn new(options: SimulationOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays a single game over a freshly shuffled standard deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the game exhausts its deck.
    pub fn trial(&mut self) -> Result<PlayResult, PlayError> {
        Game::standard(self.options.weapon_max_damage, &mut self.rng).play()
    }

    /// Runs every configured trial and returns the damage table.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Trial`] for the first failing trial; no
    /// partial table is returned.
    pub fn run(&mut self) -> Result<DamageTable, SimulationError> {
        let mut table = DamageTable::new();

        for trial in 0..self.options.iterations {
            let result = self
                .trial()
                .map_err(|source| SimulationError::Trial { trial, source })?;
            table.record(result.damage_done);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MAX_SCORE, applied_damage};

    #[test]
    fn counts_sum_to_iterations() {
        let options = SimulationOptions::default().with_iterations(2_000);
        let table = Simulation::new(options, 5).run().unwrap();

        assert_eq!(table.total(), 2_000);
        assert_eq!(table.trials(), 2_000);
    }

    #[test]
    fn same_seed_same_table() {
        let options = SimulationOptions::default().with_iterations(500);
        let first = Simulation::new(options, 9).run().unwrap();
        let second = Simulation::new(options, 9).run().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_iterations_yield_empty_table() {
        let options = SimulationOptions::default().with_iterations(0);
        let table = Simulation::new(options, 1).run().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn trials_respect_stopping_rule() {
        let options = SimulationOptions::default().with_weapon_max_damage(7);
        let mut simulation = Simulation::new(options, 17);

        for _ in 0..1_000 {
            let result = simulation.trial().unwrap();
            if result.is_bust() {
                assert_eq!(result.damage_done, 0);
            } else {
                assert!(result.score <= MAX_SCORE);
                assert_eq!(result.damage_done, applied_damage(result.score, 7));
                assert_ne!(result.damage_done, 0);
            }
        }
    }
}
