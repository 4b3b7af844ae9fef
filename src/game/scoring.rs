//! Damage scoring.

/// The score ceiling. Any score above it is a bust.
pub const MAX_SCORE: u32 = 21;

/// Returns the damage dealt by stopping at `score`.
///
/// A bust deals no damage. Otherwise the damage is how far `score` reaches
/// into the last `max_damage` points below the ceiling, i.e.
/// `max(0, score - 21 + max_damage)`.
///
/// # Example
///
/// ```
/// use damage_probabilities::applied_damage;
///
/// assert_eq!(applied_damage(18, 5), 2);
/// assert_eq!(applied_damage(21, 5), 5);
/// assert_eq!(applied_damage(22, 5), 0);
/// assert_eq!(applied_damage(15, 5), 0);
/// ```
#[must_use]
pub const fn applied_damage(score: u32, max_damage: u32) -> u32 {
    if score > MAX_SCORE {
        return 0;
    }
    max_damage.saturating_sub(MAX_SCORE - score)
}
