//! Active combat stance.
//!
//! A stance is the combat option a combatant currently has selected. It is
//! the fallback source for attack type and style whenever a caller does not
//! override them.

use serde::{Deserialize, Serialize};

use crate::types::{
    Channel, MagicAttackStyle, MeleeAttackStyle, MeleeAttackType, RangedAttackStyle,
    RangedAttackType,
};

/// The combatant's active combat option.
///
/// Accessors return `None` for channels the stance does not belong to, e.g.
/// [`Stance::melee_type`] on a ranged stance.
///
/// # Example
///
/// ```
/// use combat_commons::{Channel, RangedAttackStyle, RangedAttackType, Stance};
///
/// let stance = Stance::Ranged {
///     attack_type: RangedAttackType::Heavy,
///     attack_style: RangedAttackStyle::Rapid,
/// };
///
/// assert_eq!(stance.channel(), Channel::Ranged);
/// assert_eq!(stance.ranged_type(), Some(RangedAttackType::Heavy));
/// assert_eq!(stance.melee_type(), None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum Stance {
    /// Melee weapon stance
    Melee {
        /// Attack type of the selected option
        attack_type: MeleeAttackType,
        /// Combat style of the selected option
        attack_style: MeleeAttackStyle,
    },
    /// Ranged weapon stance
    Ranged {
        /// Attack type of the equipped ammunition/weapon
        attack_type: RangedAttackType,
        /// Combat style of the selected option
        attack_style: RangedAttackStyle,
    },
    /// Powered staff or autocast stance
    Magic {
        /// Combat style of the selected option
        attack_style: MagicAttackStyle,
    },
}

impl Stance {
    /// Returns the channel this stance attacks through.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        match self {
            Self::Melee { .. } => Channel::Melee,
            Self::Ranged { .. } => Channel::Ranged,
            Self::Magic { .. } => Channel::Magic,
        }
    }

    /// Melee attack type, if this is a melee stance.
    #[must_use]
    pub const fn melee_type(&self) -> Option<MeleeAttackType> {
        match self {
            Self::Melee { attack_type, .. } => Some(*attack_type),
            _ => None,
        }
    }

    /// Melee combat style, if this is a melee stance.
    #[must_use]
    pub const fn melee_style(&self) -> Option<MeleeAttackStyle> {
        match self {
            Self::Melee { attack_style, .. } => Some(*attack_style),
            _ => None,
        }
    }

    /// Ranged attack type, if this is a ranged stance.
    #[must_use]
    pub const fn ranged_type(&self) -> Option<RangedAttackType> {
        match self {
            Self::Ranged { attack_type, .. } => Some(*attack_type),
            _ => None,
        }
    }

    /// Ranged combat style, if this is a ranged stance.
    #[must_use]
    pub const fn ranged_style(&self) -> Option<RangedAttackStyle> {
        match self {
            Self::Ranged { attack_style, .. } => Some(*attack_style),
            _ => None,
        }
    }

    /// Magic combat style, if this is a magic stance.
    #[must_use]
    pub const fn magic_style(&self) -> Option<MagicAttackStyle> {
        match self {
            Self::Magic { attack_style } => Some(*attack_style),
            _ => None,
        }
    }
}

impl Default for Stance {
    /// An unarmed punch: crush, accurate.
    fn default() -> Self {
        Self::Melee {
            attack_type: MeleeAttackType::Crush,
            attack_style: MeleeAttackStyle::Accurate,
        }
    }
}
