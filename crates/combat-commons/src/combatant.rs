//! Combatant attribute capability.
//!
//! Accuracy resolvers never see concrete player or NPC types. They read
//! attributes through [`CombatAttributes`] and branch on the closed
//! [`Combatant`] tag only to pick a sourcing rule.
//!
//! # Defaults
//!
//! Bonus lookups default to `0` and [`CombatAttributes::spellbook`] defaults
//! to `None`. An implementor only overrides what it actually tracks; absent
//! attributes are never an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bonus::BonusColumn;
use crate::stance::Stance;
use crate::types::{Channel, MagicAttackStyle, MeleeAttackStyle, RangedAttackStyle, Spellbook};

/// Read access to the combat attributes of a player or NPC.
///
/// Levels are *effective* levels: stance, prayer and potion adjustments are
/// applied by the implementor before they reach the accuracy layer.
///
/// # Example
///
/// ```
/// use combat_commons::{
///     Channel, CombatAttributes, MagicAttackStyle, MeleeAttackStyle, RangedAttackStyle, Stance,
/// };
///
/// struct Scarecrow;
///
/// impl CombatAttributes for Scarecrow {
///     fn melee_offence_level(&self, _style: Option<MeleeAttackStyle>) -> i32 { 1 }
///     fn ranged_offence_level(&self, _style: Option<RangedAttackStyle>) -> i32 { 1 }
///     fn magic_offence_level(&self, _style: Option<MagicAttackStyle>) -> i32 { 1 }
///     fn defence_level(&self, _channel: Channel) -> i32 { 1 }
///     fn stance(&self) -> Stance { Stance::default() }
/// }
///
/// let scarecrow = Scarecrow;
/// assert_eq!(scarecrow.offence_bonus(combat_commons::BonusColumn::Stab), 0);
/// assert_eq!(scarecrow.spellbook(), None);
/// ```
pub trait CombatAttributes: Send + Sync {
    /// Effective melee attack level for `style`.
    fn melee_offence_level(&self, style: Option<MeleeAttackStyle>) -> i32;

    /// Effective ranged attack level for `style`.
    fn ranged_offence_level(&self, style: Option<RangedAttackStyle>) -> i32;

    /// Effective magic attack level for `style`.
    fn magic_offence_level(&self, style: Option<MagicAttackStyle>) -> i32;

    /// Effective defence level against attacks through `channel`.
    fn defence_level(&self, channel: Channel) -> i32;

    /// Equipment accuracy bonus in `column`.
    fn offence_bonus(&self, column: BonusColumn) -> i32 {
        let _ = column;
        0
    }

    /// Equipment defence bonus in `column`.
    fn defence_bonus(&self, column: BonusColumn) -> i32 {
        let _ = column;
        0
    }

    /// The active combat stance.
    fn stance(&self) -> Stance;

    /// The spellbook currently in use. Only meaningful for players.
    fn spellbook(&self) -> Option<Spellbook> {
        None
    }
}

/// Kind of combatant, the tag half of [`Combatant`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatantKind {
    /// Player-controlled combatant
    Player,
    /// Non-player actor
    Npc,
}

impl fmt::Display for CombatantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Npc => write!(f, "npc"),
        }
    }
}

/// A participant in an attack: a borrowed attribute view tagged with its kind.
///
/// The variant decides which sourcing rule a resolver applies; the attributes
/// themselves are always read through [`CombatAttributes`].
#[derive(Clone, Copy)]
pub enum Combatant<'a> {
    /// Player-controlled combatant
    Player(&'a dyn CombatAttributes),
    /// Non-player actor
    Npc(&'a dyn CombatAttributes),
}

impl<'a> Combatant<'a> {
    /// Returns the kind tag of this combatant.
    #[must_use]
    pub const fn kind(&self) -> CombatantKind {
        match self {
            Self::Player(_) => CombatantKind::Player,
            Self::Npc(_) => CombatantKind::Npc,
        }
    }

    /// Returns the attribute view regardless of kind.
    #[must_use]
    pub fn attributes(&self) -> &'a dyn CombatAttributes {
        match self {
            Self::Player(attributes) | Self::Npc(attributes) => *attributes,
        }
    }
}

impl fmt::Debug for Combatant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Combatant")
            .field(&self.kind())
            .field(&self.attributes().stance())
            .finish()
    }
}
