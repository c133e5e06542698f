//! Plain-data combatant snapshot.
//!
//! [`CombatantSnapshot`] is a frozen copy of the attributes an accuracy check
//! reads. Hosts that keep combat state elsewhere can build one per attack, or
//! load fixtures from JSON.

use serde::{Deserialize, Serialize};

use crate::bonus::{BonusColumn, BonusTable};
use crate::combatant::CombatAttributes;
use crate::stance::Stance;
use crate::types::{Channel, MagicAttackStyle, MeleeAttackStyle, RangedAttackStyle, Spellbook};

/// One effective level per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelLevels {
    /// Melee level
    pub melee: i32,
    /// Ranged level
    pub ranged: i32,
    /// Magic level
    pub magic: i32,
}

impl ChannelLevels {
    /// Returns the level for `channel`.
    #[must_use]
    pub const fn get(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Melee => self.melee,
            Channel::Ranged => self.ranged,
            Channel::Magic => self.magic,
        }
    }

    /// Stores the level for `channel`.
    pub fn set(&mut self, channel: Channel, level: i32) {
        match channel {
            Channel::Melee => self.melee = level,
            Channel::Ranged => self.ranged = level,
            Channel::Magic => self.magic = level,
        }
    }
}

/// Frozen combat attributes of a single combatant.
///
/// Offence levels are stored already adjusted for stance, so the style passed
/// to the `*_offence_level` lookups is not consulted.
///
/// # Example
///
/// ```
/// use combat_commons::{
///     BonusColumn, Channel, CombatAttributes, CombatantSnapshot, RangedAttackStyle,
///     RangedAttackType, Stance,
/// };
///
/// let ranger = CombatantSnapshot::new(Stance::Ranged {
///     attack_type: RangedAttackType::Standard,
///     attack_style: RangedAttackStyle::Rapid,
/// })
/// .with_levels(Channel::Ranged, 112, 70)
/// .with_offence_bonus(BonusColumn::Ranged, 150);
///
/// assert_eq!(ranger.ranged_offence_level(None), 112);
/// assert_eq!(ranger.offence_bonus(BonusColumn::Ranged), 150);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatantSnapshot {
    /// Effective offensive levels
    pub offence: ChannelLevels,
    /// Effective defensive levels
    pub defence: ChannelLevels,
    /// Equipment accuracy bonuses
    pub offence_bonuses: BonusTable,
    /// Equipment defence bonuses
    pub defence_bonuses: BonusTable,
    /// Active stance
    pub stance: Stance,
    /// Current spellbook, players only
    pub spellbook: Option<Spellbook>,
}

impl CombatantSnapshot {
    /// Creates an all-zero snapshot with the given stance.
    #[must_use]
    pub fn new(stance: Stance) -> Self {
        Self {
            stance,
            ..Self::default()
        }
    }

    /// Sets the offensive and defensive level for `channel`.
    #[must_use]
    pub fn with_levels(mut self, channel: Channel, offence: i32, defence: i32) -> Self {
        self.offence.set(channel, offence);
        self.defence.set(channel, defence);
        self
    }

    /// Sets an equipment accuracy bonus.
    #[must_use]
    pub fn with_offence_bonus(mut self, column: BonusColumn, value: i32) -> Self {
        self.offence_bonuses.set(column, value);
        self
    }

    /// Sets an equipment defence bonus.
    #[must_use]
    pub fn with_defence_bonus(mut self, column: BonusColumn, value: i32) -> Self {
        self.defence_bonuses.set(column, value);
        self
    }

    /// Sets the current spellbook.
    #[must_use]
    pub fn with_spellbook(mut self, spellbook: Spellbook) -> Self {
        self.spellbook = Some(spellbook);
        self
    }
}

impl CombatAttributes for CombatantSnapshot {
    fn melee_offence_level(&self, _style: Option<MeleeAttackStyle>) -> i32 {
        self.offence.melee
    }

    fn ranged_offence_level(&self, _style: Option<RangedAttackStyle>) -> i32 {
        self.offence.ranged
    }

    fn magic_offence_level(&self, _style: Option<MagicAttackStyle>) -> i32 {
        self.offence.magic
    }

    fn defence_level(&self, channel: Channel) -> i32 {
        self.defence.get(channel)
    }

    fn offence_bonus(&self, column: BonusColumn) -> i32 {
        self.offence_bonuses.get(column)
    }

    fn defence_bonus(&self, column: BonusColumn) -> i32 {
        self.defence_bonuses.get(column)
    }

    fn stance(&self) -> Stance {
        self.stance
    }

    fn spellbook(&self) -> Option<Spellbook> {
        self.spellbook
    }
}
