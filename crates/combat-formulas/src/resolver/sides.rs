//! Attacker- and defender-side sourcing rules.
//!
//! A resolver is a channel formula parameterised by one [`AttackerSide`] and
//! one [`DefenderSide`]. [`PlayerSide`] and [`NpcSide`] implement both, which
//! gives the sixteen pair × channel resolvers from four channel formulas.

use combat_commons::{
    BonusColumn, CombatAttributes, CombatantKind, RangedAttackType, Stance,
};

use crate::defaults::{self, MagicOffence, MeleeOffence, RangedOffence};
use crate::reference::MagicReference;
use crate::request::{MagicAttack, MeleeAttack, RangedAttack, StaffAttack};

use super::rolls::MagicDefence;

/// How an attacker's request parameters are resolved.
pub trait AttackerSide: Send + Sync + 'static {
    /// Combatant kind this rule applies to.
    const KIND: CombatantKind;

    /// Resolves melee parameters.
    fn melee(attack: &MeleeAttack, stance: &Stance) -> MeleeOffence;

    /// Resolves ranged parameters.
    fn ranged(attack: &RangedAttack, stance: &Stance) -> RangedOffence;

    /// Resolves staff-style magic parameters (also used by magic-offence
    /// multi-style attacks).
    fn staff(attack: &StaffAttack, stance: &Stance) -> MagicOffence;

    /// Resolves a magic attack and the defence adjustments it implies.
    fn magic(
        attack: &MagicAttack,
        attacker: &dyn CombatAttributes,
        reference: &dyn MagicReference,
    ) -> (MagicOffence, MagicDefence);

    /// Ranged block type for cross-channel attacks, which have no same-channel
    /// attack type to fall back on.
    fn ranged_block(block_type: Option<RangedAttackType>, stance: &Stance)
        -> Option<RangedAttackType>;
}

/// How a defender's bonus columns are selected.
pub trait DefenderSide: Send + Sync + 'static {
    /// Combatant kind this rule applies to.
    const KIND: CombatantKind;

    /// Ranged defence column for a block type.
    fn ranged_column(block_type: Option<RangedAttackType>) -> BonusColumn;
}

/// Sourcing rules for players.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerSide;

/// Sourcing rules for NPCs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpcSide;

impl AttackerSide for PlayerSide {
    const KIND: CombatantKind = CombatantKind::Player;

    fn melee(attack: &MeleeAttack, stance: &Stance) -> MeleeOffence {
        defaults::player_melee(attack, stance)
    }

    fn ranged(attack: &RangedAttack, stance: &Stance) -> RangedOffence {
        defaults::player_ranged(attack, stance)
    }

    fn staff(attack: &StaffAttack, stance: &Stance) -> MagicOffence {
        defaults::player_staff(attack, stance)
    }

    fn magic(
        attack: &MagicAttack,
        attacker: &dyn CombatAttributes,
        reference: &dyn MagicReference,
    ) -> (MagicOffence, MagicDefence) {
        let stance = attacker.stance();
        match attack {
            MagicAttack::Spell(cast) => {
                let spellbook = defaults::spellbook(cast.spellbook, attacker.spellbook());
                let level_reduction = if cast.used_sunfire_rune {
                    reference.sunfire_defence_reduction()
                } else {
                    0
                };
                let defence = MagicDefence {
                    column: reference.spell_defence_column(cast.spell, spellbook),
                    level_reduction,
                };
                (defaults::player_innate_magic(&stance), defence)
            }
            MagicAttack::Staff(staff) => {
                (defaults::player_staff(staff, &stance), MagicDefence::PLAIN)
            }
            MagicAttack::Innate => (defaults::player_innate_magic(&stance), MagicDefence::PLAIN),
        }
    }

    fn ranged_block(
        block_type: Option<RangedAttackType>,
        _stance: &Stance,
    ) -> Option<RangedAttackType> {
        block_type
    }
}

impl AttackerSide for NpcSide {
    const KIND: CombatantKind = CombatantKind::Npc;

    fn melee(attack: &MeleeAttack, stance: &Stance) -> MeleeOffence {
        defaults::npc_melee(attack, stance)
    }

    fn ranged(_attack: &RangedAttack, stance: &Stance) -> RangedOffence {
        defaults::npc_ranged(stance)
    }

    fn staff(_attack: &StaffAttack, _stance: &Stance) -> MagicOffence {
        defaults::npc_magic()
    }

    fn magic(
        _attack: &MagicAttack,
        _attacker: &dyn CombatAttributes,
        _reference: &dyn MagicReference,
    ) -> (MagicOffence, MagicDefence) {
        (defaults::npc_magic(), MagicDefence::PLAIN)
    }

    fn ranged_block(
        _block_type: Option<RangedAttackType>,
        stance: &Stance,
    ) -> Option<RangedAttackType> {
        stance.ranged_type()
    }
}

impl DefenderSide for PlayerSide {
    const KIND: CombatantKind = CombatantKind::Player;

    /// Players have a single ranged defence bonus.
    fn ranged_column(_block_type: Option<RangedAttackType>) -> BonusColumn {
        BonusColumn::Ranged
    }
}

impl DefenderSide for NpcSide {
    const KIND: CombatantKind = CombatantKind::Npc;

    /// NPCs defend per ammunition type; no block type reads the untyped column.
    fn ranged_column(block_type: Option<RangedAttackType>) -> BonusColumn {
        block_type.map_or(BonusColumn::Ranged, BonusColumn::ranged)
    }
}
