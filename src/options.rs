//! Simulation configuration options.

/// Configuration options for a simulation run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use damage_probabilities::SimulationOptions;
///
/// let options = SimulationOptions::default()
///     .with_weapon_max_damage(6)
///     .with_iterations(1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimulationOptions {
    /// Maximum damage of the weapon, passed to every game.
    pub weapon_max_damage: u32,
    /// Number of independent trials to run.
    pub iterations: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            weapon_max_damage: 10,
            iterations: 100_000,
        }
    }
}

impl SimulationOptions {
    /// Sets the weapon's maximum damage.
    ///
    /// # Example
    ///
    /// ```
    /// use damage_probabilities::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_weapon_max_damage(4);
    /// assert_eq!(options.weapon_max_damage, 4);
    /// ```
    #[must_use]
    pub const fn with_weapon_max_damage(mut self, max_damage: u32) -> Self {
        self.weapon_max_damage = max_damage;
        self
    }

    /// Sets the number of trials.
    ///
    /// # Example
    ///
    /// ```
    /// use damage_probabilities::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_iterations(500);
    /// assert_eq!(options.iterations, 500);
    /// ```
    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}
