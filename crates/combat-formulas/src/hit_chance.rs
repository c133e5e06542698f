//! Hit chance value type and the shared roll reduction.
//!
//! Every resolver assembles an attack roll and a defence roll
//! ([`Rolls`]) and hands them to [`HitChance::from_rolls`]. The reduction is
//! the only place the accuracy formula itself lives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale of a [`HitChance`]: `10_000` means a guaranteed hit (0.01% units).
pub const HIT_CHANCE_SCALE: u32 = 10_000;

/// Probability that an attack lands, in 0.01% units.
///
/// # Invariants
///
/// `0 <= value <= HIT_CHANCE_SCALE`, enforced by every constructor.
///
/// # Example
///
/// ```
/// use combat_formulas::HitChance;
///
/// assert_eq!(HitChance::from_rolls(100, 50).get(), 7426);
/// assert_eq!(HitChance::from_rolls(50, 100).get(), 2475);
/// assert_eq!(HitChance::new(12_345), HitChance::CERTAIN);
/// ```
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u32", into = "u32")]
pub struct HitChance(u32);

impl HitChance {
    /// Never hits.
    pub const ZERO: Self = Self(0);

    /// Always hits.
    pub const CERTAIN: Self = Self(HIT_CHANCE_SCALE);

    /// Creates a hit chance, clamping `value` into `[0, 10000]`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(0, i64::from(HIT_CHANCE_SCALE));
        Self(u32::try_from(clamped).unwrap_or(0))
    }

    /// Reduces an attack roll and a defence roll to a hit chance.
    ///
    /// ```text
    /// attack > defence:  10000 - floor((defence + 2) * 10000 / (2 * (attack + 1)))
    /// otherwise:         floor(attack * 10000 / (2 * (defence + 1)))
    /// ```
    ///
    /// Ties take the second branch. Rolls go through the formula as given,
    /// so a non-negative attack roll above a negative defence roll (possible
    /// with unvalidated negative bonuses) lands at or near a certain hit. Where
    /// the formula has no meaning, with both rolls negative or a negative
    /// defence roll in the second branch, the chance is zero. The result is
    /// clamped into `[0, 10000]` regardless.
    #[must_use]
    pub fn from_rolls(attack_roll: i64, defence_roll: i64) -> Self {
        let scale = i64::from(HIT_CHANCE_SCALE);

        let chance = if attack_roll > defence_roll {
            if attack_roll < 0 {
                return Self::ZERO;
            }
            let numerator = defence_roll.saturating_add(2).saturating_mul(scale);
            let denominator = attack_roll.saturating_add(1).saturating_mul(2);
            scale.saturating_sub(numerator.div_euclid(denominator))
        } else {
            if defence_roll < 0 {
                return Self::ZERO;
            }
            let numerator = attack_roll.saturating_mul(scale);
            let denominator = defence_roll.saturating_add(1).saturating_mul(2);
            numerator.div_euclid(denominator)
        };

        Self::new(chance)
    }

    /// Returns the raw value in 0.01% units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the chance as a fraction in `[0.0, 1.0]`.
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / f64::from(HIT_CHANCE_SCALE)
    }
}

impl From<u32> for HitChance {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<HitChance> for u32 {
    fn from(chance: HitChance) -> Self {
        chance.0
    }
}

impl fmt::Display for HitChance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

/// Attack and defence rolls assembled by a resolver.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rolls {
    /// Attacker's roll after the special multiplier
    pub attack: i64,
    /// Defender's roll
    pub defence: i64,
}

impl Rolls {
    /// Creates a roll pair.
    #[must_use]
    pub const fn new(attack: i64, defence: i64) -> Self {
        Self { attack, defence }
    }

    /// Reduces this pair with [`HitChance::from_rolls`].
    #[must_use]
    pub fn hit_chance(self) -> HitChance {
        HitChance::from_rolls(self.attack, self.defence)
    }
}
