//! Attribute access helpers shared by every resolver.
//!
//! Each helper turns one side of an attack into a roll:
//! `effective level * (equipment bonus + 64)`. Which level and which bonus
//! column is the only thing that varies between resolvers.

use combat_commons::{BonusColumn, Channel, CombatAttributes, MeleeAttackType};

use crate::defaults::{MagicOffence, MeleeOffence, RangedOffence};

/// Added to every equipment bonus before multiplying by the level.
pub const BONUS_OFFSET: i64 = 64;

/// Defence-side adjustments for a magic attack.
///
/// Plain staff and NPC magic use [`MagicDefence::PLAIN`]; spell casts pick
/// the column and sunfire reduction from reference data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MagicDefence {
    /// Defence bonus column to read
    pub column: BonusColumn,
    /// Levels removed from the defender's magic defence level
    pub level_reduction: i32,
}

impl MagicDefence {
    /// Magic column, no reduction.
    pub const PLAIN: Self = Self {
        column: BonusColumn::Magic,
        level_reduction: 0,
    };
}

/// `level * (bonus + 64)`.
#[must_use]
pub fn roll(level: i32, bonus: i32) -> i64 {
    i64::from(level) * (i64::from(bonus) + BONUS_OFFSET)
}

/// `floor(roll * multiplier)`. The multiplier is expected to be sanitised.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn apply_multiplier(roll: i64, multiplier: f64) -> i64 {
    // Float-to-int `as` saturates, so huge products cannot wrap.
    (roll as f64 * multiplier).floor() as i64
}

fn offence_bonus(attributes: &dyn CombatAttributes, column: Option<BonusColumn>) -> i32 {
    column.map_or(0, |column| attributes.offence_bonus(column))
}

fn defence_bonus(attributes: &dyn CombatAttributes, column: Option<BonusColumn>) -> i32 {
    column.map_or(0, |column| attributes.defence_bonus(column))
}

/// Melee attack roll: style-adjusted melee level, attack type column.
#[must_use]
pub fn melee_attack_roll(attacker: &dyn CombatAttributes, offence: &MeleeOffence) -> i64 {
    let level = attacker.melee_offence_level(offence.attack_style);
    let bonus = offence_bonus(attacker, offence.attack_type.map(BonusColumn::melee));
    apply_multiplier(roll(level, bonus), offence.special_multiplier)
}

/// Ranged attack roll: style-adjusted ranged level, ranged column.
#[must_use]
pub fn ranged_attack_roll(attacker: &dyn CombatAttributes, offence: &RangedOffence) -> i64 {
    let level = attacker.ranged_offence_level(offence.attack_style);
    let bonus = attacker.offence_bonus(BonusColumn::Ranged);
    apply_multiplier(roll(level, bonus), offence.special_multiplier)
}

/// Magic attack roll: style-adjusted magic level, magic column.
#[must_use]
pub fn magic_attack_roll(attacker: &dyn CombatAttributes, offence: &MagicOffence) -> i64 {
    let level = attacker.magic_offence_level(offence.attack_style);
    let bonus = attacker.offence_bonus(BonusColumn::Magic);
    apply_multiplier(roll(level, bonus), offence.special_multiplier)
}

/// Melee defence roll against `block_type`; no block type reads as zero bonus.
#[must_use]
pub fn melee_defence_roll(
    defender: &dyn CombatAttributes,
    block_type: Option<MeleeAttackType>,
) -> i64 {
    let level = defender.defence_level(Channel::Melee);
    let bonus = defence_bonus(defender, block_type.map(BonusColumn::melee));
    roll(level, bonus)
}

/// Ranged defence roll against an already selected column.
#[must_use]
pub fn ranged_defence_roll(defender: &dyn CombatAttributes, column: BonusColumn) -> i64 {
    let level = defender.defence_level(Channel::Ranged);
    roll(level, defender.defence_bonus(column))
}

/// Magic defence roll with the level reduction applied before multiplying.
///
/// Only a reduced level saturates at zero.
#[must_use]
pub fn magic_defence_roll(defender: &dyn CombatAttributes, defence: MagicDefence) -> i64 {
    let level = defender.defence_level(Channel::Magic);
    let level = if defence.level_reduction > 0 {
        level.saturating_sub(defence.level_reduction).max(0)
    } else {
        level
    };
    roll(level, defender.defence_bonus(defence.column))
}
