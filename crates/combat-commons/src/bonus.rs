//! Equipment bonus columns.

use serde::{Deserialize, Serialize};

use crate::types::{MeleeAttackType, RangedAttackType};

/// A column of the equipment bonus table.
///
/// The same columns exist on the offensive and the defensive side. Players
/// only use the untyped [`BonusColumn::Ranged`] column; NPCs additionally
/// carry a defence bonus per [`RangedAttackType`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusColumn {
    /// Stab bonus
    Stab,
    /// Slash bonus
    Slash,
    /// Crush bonus
    Crush,
    /// Untyped ranged bonus
    Ranged,
    /// Ranged bonus against light ammunition
    RangedLight,
    /// Ranged bonus against standard ammunition
    RangedStandard,
    /// Ranged bonus against heavy ammunition
    RangedHeavy,
    /// Magic bonus
    Magic,
}

impl BonusColumn {
    /// Column read for a melee attack or block of the given type.
    #[must_use]
    pub const fn melee(attack_type: MeleeAttackType) -> Self {
        match attack_type {
            MeleeAttackType::Stab => Self::Stab,
            MeleeAttackType::Slash => Self::Slash,
            MeleeAttackType::Crush => Self::Crush,
        }
    }

    /// Typed ranged defence column for the given ammunition type.
    #[must_use]
    pub const fn ranged(attack_type: RangedAttackType) -> Self {
        match attack_type {
            RangedAttackType::Light => Self::RangedLight,
            RangedAttackType::Standard => Self::RangedStandard,
            RangedAttackType::Heavy => Self::RangedHeavy,
        }
    }
}

/// One side (offence or defence) of an equipment bonus table.
///
/// Columns default to zero so sparse JSON descriptions stay short.
///
/// # Example
///
/// ```
/// use combat_commons::{BonusColumn, BonusTable};
///
/// let table = BonusTable {
///     slash: 82,
///     ..BonusTable::default()
/// };
/// assert_eq!(table.get(BonusColumn::Slash), 82);
/// assert_eq!(table.get(BonusColumn::Magic), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusTable {
    /// Stab bonus
    pub stab: i32,
    /// Slash bonus
    pub slash: i32,
    /// Crush bonus
    pub crush: i32,
    /// Untyped ranged bonus
    pub ranged: i32,
    /// Ranged bonus against light ammunition
    pub ranged_light: i32,
    /// Ranged bonus against standard ammunition
    pub ranged_standard: i32,
    /// Ranged bonus against heavy ammunition
    pub ranged_heavy: i32,
    /// Magic bonus
    pub magic: i32,
}

impl BonusTable {
    /// Returns the bonus stored in `column`.
    #[must_use]
    pub const fn get(&self, column: BonusColumn) -> i32 {
        match column {
            BonusColumn::Stab => self.stab,
            BonusColumn::Slash => self.slash,
            BonusColumn::Crush => self.crush,
            BonusColumn::Ranged => self.ranged,
            BonusColumn::RangedLight => self.ranged_light,
            BonusColumn::RangedStandard => self.ranged_standard,
            BonusColumn::RangedHeavy => self.ranged_heavy,
            BonusColumn::Magic => self.magic,
        }
    }

    /// Stores `value` in `column`.
    pub fn set(&mut self, column: BonusColumn, value: i32) {
        let slot = match column {
            BonusColumn::Stab => &mut self.stab,
            BonusColumn::Slash => &mut self.slash,
            BonusColumn::Crush => &mut self.crush,
            BonusColumn::Ranged => &mut self.ranged,
            BonusColumn::RangedLight => &mut self.ranged_light,
            BonusColumn::RangedStandard => &mut self.ranged_standard,
            BonusColumn::RangedHeavy => &mut self.ranged_heavy,
            BonusColumn::Magic => &mut self.magic,
        };
        *slot = value;
    }
}
