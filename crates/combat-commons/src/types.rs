//! Attack vocabulary: channels, attack types, attack styles and spellbooks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base damage channel an attack is delivered through.
///
/// Hybrid attacks that read offence and defence from different channels are
/// composed from two of these; there is no separate hybrid channel here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Close-range weapon attacks
    Melee,
    /// Projectile attacks (bows, crossbows, thrown weapons)
    Ranged,
    /// Spells and powered staves
    Magic,
}

impl Channel {
    /// All channels in declaration order.
    pub const ALL: [Channel; 3] = [Channel::Melee, Channel::Ranged, Channel::Magic];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Melee => write!(f, "melee"),
            Self::Ranged => write!(f, "ranged"),
            Self::Magic => write!(f, "magic"),
        }
    }
}

/// Melee attack type. Selects the stab/slash/crush bonus column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeleeAttackType {
    /// Piercing attacks (daggers, spears)
    Stab,
    /// Cutting attacks (scimitars, longswords)
    Slash,
    /// Blunt attacks (maces, hammers)
    Crush,
}

/// Ranged attack type. NPCs carry a separate defence bonus for each.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangedAttackType {
    /// Darts, knives and other thrown weapons
    Light,
    /// Bows and arrows
    Standard,
    /// Crossbows and bolts
    Heavy,
}

/// Melee combat style of the active stance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeleeAttackStyle {
    /// Trains attack
    Accurate,
    /// Trains strength
    Aggressive,
    /// Trains defence
    Defensive,
    /// Shared training
    Controlled,
}

/// Ranged combat style of the active stance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangedAttackStyle {
    /// Accuracy focused
    Accurate,
    /// Faster attacks
    Rapid,
    /// Extended attack range
    LongRange,
}

/// Magic combat style of the active stance (powered staves and autocast).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagicAttackStyle {
    /// Accuracy focused
    Accurate,
    /// Extended attack range
    LongRange,
    /// Defensive casting
    Defensive,
}

/// Spellbook a player is currently casting from.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spellbook {
    /// The standard spellbook
    #[default]
    Standard,
    /// Ancient magicks
    Ancients,
    /// Lunar spellbook
    Lunar,
    /// Arceuus spellbook
    Arceuus,
}

impl fmt::Display for Spellbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Ancients => write!(f, "ancients"),
            Self::Lunar => write!(f, "lunar"),
            Self::Arceuus => write!(f, "arceuus"),
        }
    }
}

/// Opaque spell identifier.
///
/// The accuracy layer never interprets spell ids; it only hands them to
/// reference data that maps spells to their defence policy.
///
/// # Example
///
/// ```
/// use combat_commons::SpellId;
///
/// let spell = SpellId::new(1190);
/// assert_eq!(spell.as_u32(), 1190);
/// assert_eq!(spell.to_string(), "1190");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellId(u32);

impl SpellId {
    /// Creates a new `SpellId` from its raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw value of this identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpellId({})", self.0)
    }
}

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SpellId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_display() {
        assert_eq!(Channel::Melee.to_string(), "melee");
        assert_eq!(Channel::Ranged.to_string(), "ranged");
        assert_eq!(Channel::Magic.to_string(), "magic");
    }

    #[test]
    fn spellbook_defaults_to_standard() {
        assert_eq!(Spellbook::default(), Spellbook::Standard);
    }

    #[test]
    fn spell_id_debug_format() {
        assert_eq!(format!("{:?}", SpellId::new(7)), "SpellId(7)");
    }

    #[test]
    fn attack_types_use_snake_case_names() {
        let json = serde_json::to_string(&RangedAttackType::Heavy).unwrap();
        assert_eq!(json, "\"heavy\"");
        let style: MagicAttackStyle = serde_json::from_str("\"long_range\"").unwrap();
        assert_eq!(style, MagicAttackStyle::LongRange);
    }
}
