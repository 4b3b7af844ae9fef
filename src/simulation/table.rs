//! Frequency table of damage outcomes.

use alloc::vec::Vec;
use core::fmt;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Observed frequency of one damage value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageFrequency {
    /// The damage value.
    pub damage: u32,
    /// How many trials dealt this damage.
    pub count: usize,
    /// Empirical probability, `count / trials`.
    pub probability: f64,
}

impl fmt::Display for DamageFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{:.2}", self.damage, self.count, self.probability)
    }
}

/// Empirical distribution of damage across trials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageTable {
    /// Occurrences per damage value.
    counts: HashMap<u32, usize>,
    /// Number of trials recorded.
    trials: usize,
}

impl DamageTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one trial that dealt `damage`.
    pub fn record(&mut self, damage: u32) {
        *self.counts.entry(damage).or_insert(0) += 1;
        self.trials += 1;
    }

    /// Adds every count of `other` into this table.
    pub fn merge(&mut self, other: &Self) {
        for (&damage, &count) in &other.counts {
            *self.counts.entry(damage).or_insert(0) += count;
        }
        self.trials += other.trials;
    }

    /// Returns how many trials dealt `damage`.
    #[must_use]
    pub fn count(&self, damage: u32) -> usize {
        self.counts.get(&damage).copied().unwrap_or(0)
    }

    /// Returns the number of trials recorded.
    #[must_use]
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns the empirical probability of `damage`.
    ///
    /// Returns `0.0` if no trials have been recorded.
    #[must_use]
    pub fn probability(&self, damage: u32) -> f64 {
        self.ratio(self.count(damage))
    }

    /// Returns the number of distinct damage values observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns whether no trials have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns every observed damage value with its count and probability,
    /// sorted by damage.
    #[must_use]
    pub fn frequencies(&self) -> Vec<DamageFrequency> {
        let mut frequencies: Vec<DamageFrequency> = self
            .counts
            .iter()
            .map(|(&damage, &count)| DamageFrequency {
                damage,
                count,
                probability: self.ratio(count),
            })
            .collect();
        frequencies.sort_unstable_by_key(|f| f.damage);
        frequencies
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for trial counts"
    )]
    fn ratio(&self, count: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        count as f64 / self.trials as f64
    }
}

impl fmt::Display for DamageTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frequency in self.frequencies() {
            writeln!(f, "{frequency}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "exact ratios of small integers")]

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn record_counts_each_damage() {
        let mut table = DamageTable::new();
        for damage in [0, 3, 0, 0] {
            table.record(damage);
        }

        assert_eq!(table.count(0), 3);
        assert_eq!(table.count(3), 1);
        assert_eq!(table.count(7), 0);
        assert_eq!(table.trials(), 4);
        assert_eq!(table.total(), 4);
        assert_eq!(table.len(), 2);
        assert_eq!(table.probability(0), 0.75);
    }

    #[test]
    fn empty_table_has_zero_probability() {
        let table = DamageTable::new();
        assert!(table.is_empty());
        assert_eq!(table.probability(0), 0.0);
        assert!(table.frequencies().is_empty());
    }

    #[test]
    fn merge_sums_counts() {
        let mut left = DamageTable::new();
        left.record(1);
        left.record(2);
        let mut right = DamageTable::new();
        right.record(2);

        left.merge(&right);

        assert_eq!(left.count(1), 1);
        assert_eq!(left.count(2), 2);
        assert_eq!(left.trials(), 3);
    }

    #[test]
    fn display_renders_sorted_lines_with_two_decimals() {
        let mut table = DamageTable::new();
        for damage in [4, 0, 0] {
            table.record(damage);
        }
        assert_eq!(table.to_string(), "0,2,0.67\n4,1,0.33\n");
    }
}
