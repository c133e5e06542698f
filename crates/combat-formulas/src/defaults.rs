//! Stance-default resolution.
//!
//! Requests carry optional attack types, styles and block types. This module
//! turns them into fully resolved offence parameters before any arithmetic:
//!
//! - **Players**: an absent type or style is read from the active stance; an
//!   absent block type falls back to the resolved attack type.
//! - **NPCs**: everything comes from the NPC's innate stance. The only
//!   override an NPC honours is the melee attack type, for NPCs that switch
//!   between several melee attacks. Styles are never applied and the special
//!   multiplier is always [`DEFAULT_SPECIAL_MULTIPLIER`].
//!
//! A resolved `None` means "no such column": the matching bonus reads as zero.

use combat_commons::{
    MagicAttackStyle, MeleeAttackStyle, MeleeAttackType, RangedAttackStyle, RangedAttackType,
    Spellbook, Stance,
};

use crate::request::{MeleeAttack, RangedAttack, StaffAttack, DEFAULT_SPECIAL_MULTIPLIER};

/// Fully resolved melee offence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeleeOffence {
    /// Attack type for the offence bonus
    pub attack_type: Option<MeleeAttackType>,
    /// Style for the effective level
    pub attack_style: Option<MeleeAttackStyle>,
    /// Attack type for the defence bonus
    pub block_type: Option<MeleeAttackType>,
    /// Sanitised special multiplier
    pub special_multiplier: f64,
}

/// Fully resolved ranged offence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RangedOffence {
    /// Ammunition type
    pub attack_type: Option<RangedAttackType>,
    /// Style for the effective level
    pub attack_style: Option<RangedAttackStyle>,
    /// Ammunition type for the defence bonus
    pub block_type: Option<RangedAttackType>,
    /// Sanitised special multiplier
    pub special_multiplier: f64,
}

/// Fully resolved magic offence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MagicOffence {
    /// Style for the effective level
    pub attack_style: Option<MagicAttackStyle>,
    /// Sanitised special multiplier
    pub special_multiplier: f64,
}

/// Clamps a special multiplier to `>= 0`. NaN becomes `0`.
#[must_use]
pub fn special_multiplier(multiplier: f64) -> f64 {
    if multiplier.is_nan() {
        0.0
    } else {
        multiplier.max(0.0)
    }
}

/// Resolves a player's melee attack against their stance.
#[must_use]
pub fn player_melee(attack: &MeleeAttack, stance: &Stance) -> MeleeOffence {
    let attack_type = attack.attack_type.or(stance.melee_type());
    MeleeOffence {
        attack_type,
        attack_style: attack.attack_style.or(stance.melee_style()),
        block_type: attack.block_type.or(attack_type),
        special_multiplier: special_multiplier(attack.special_multiplier),
    }
}

/// Resolves an NPC's melee attack. Only `attack_type` is honoured.
#[must_use]
pub fn npc_melee(attack: &MeleeAttack, stance: &Stance) -> MeleeOffence {
    let attack_type = attack.attack_type.or(stance.melee_type());
    MeleeOffence {
        attack_type,
        attack_style: None,
        block_type: attack_type,
        special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
    }
}

/// Resolves a player's ranged attack against their stance.
#[must_use]
pub fn player_ranged(attack: &RangedAttack, stance: &Stance) -> RangedOffence {
    let attack_type = attack.attack_type.or(stance.ranged_type());
    RangedOffence {
        attack_type,
        attack_style: attack.attack_style.or(stance.ranged_style()),
        block_type: attack.block_type.or(attack_type),
        special_multiplier: special_multiplier(attack.special_multiplier),
    }
}

/// Resolves an NPC's ranged attack from its innate stance alone.
#[must_use]
pub fn npc_ranged(stance: &Stance) -> RangedOffence {
    let attack_type = stance.ranged_type();
    RangedOffence {
        attack_type,
        attack_style: None,
        block_type: attack_type,
        special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
    }
}

/// Resolves a player's powered staff attack against their stance.
#[must_use]
pub fn player_staff(attack: &StaffAttack, stance: &Stance) -> MagicOffence {
    MagicOffence {
        attack_style: attack.attack_style.or(stance.magic_style()),
        special_multiplier: special_multiplier(attack.special_multiplier),
    }
}

/// Resolves a player spell cast or innate magic. Style comes from the stance
/// and there is never a special multiplier.
#[must_use]
pub fn player_innate_magic(stance: &Stance) -> MagicOffence {
    MagicOffence {
        attack_style: stance.magic_style(),
        special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
    }
}

/// Resolves an NPC's magic attack.
#[must_use]
pub const fn npc_magic() -> MagicOffence {
    MagicOffence {
        attack_style: None,
        special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
    }
}

/// Spellbook for a cast: the override, else the caster's current book, else
/// [`Spellbook::Standard`].
#[must_use]
pub fn spellbook(explicit: Option<Spellbook>, current: Option<Spellbook>) -> Spellbook {
    explicit.or(current).unwrap_or_default()
}
