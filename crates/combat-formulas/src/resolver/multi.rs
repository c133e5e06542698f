//! Cross-channel ("multi-style") attacks.
//!
//! The attack roll comes from one channel and the defence roll from another.
//! Each combination reuses the single-channel offence sourcing of the
//! attacker side, so stance defaults and NPC restrictions behave exactly as
//! they do for plain attacks.

use std::marker::PhantomData;

use combat_commons::{CombatAttributes, RangedAttackType, Stance};

use crate::hit_chance::Rolls;
use crate::request::{
    ChannelKind, MeleeAttack, MultiStyleAttack, PairKind, RangedAttack, ResolverKey, StaffAttack,
};

use super::rolls::{
    magic_attack_roll, magic_defence_roll, melee_attack_roll, ranged_attack_roll,
    ranged_defence_roll, MagicDefence,
};
use super::sides::{AttackerSide, DefenderSide, NpcSide, PlayerSide};
use super::{AccuracyResolver, AttackContext};

/// Multi-style accuracy for one attacker/defender pairing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiStyleAccuracy<A, D> {
    _sides: PhantomData<fn() -> (A, D)>,
}

impl<A, D> MultiStyleAccuracy<A, D> {
    /// Creates the resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _sides: PhantomData,
        }
    }
}

impl<A: AttackerSide, D: DefenderSide> MultiStyleAccuracy<A, D> {
    fn ranged_defence(
        defender: &dyn CombatAttributes,
        block_type: Option<RangedAttackType>,
        stance: &Stance,
    ) -> i64 {
        let column = D::ranged_column(A::ranged_block(block_type, stance));
        ranged_defence_roll(defender, column)
    }
}

impl<A: AttackerSide, D: DefenderSide> AccuracyResolver<MultiStyleAttack>
    for MultiStyleAccuracy<A, D>
{
    fn key(&self) -> ResolverKey {
        ResolverKey::new(PairKind::of(A::KIND, D::KIND), ChannelKind::MultiStyle)
    }

    fn rolls(&self, ctx: &AttackContext<'_, MultiStyleAttack>) -> Rolls {
        let stance = ctx.attacker.stance();
        match *ctx.params {
            MultiStyleAttack::MagicalMelee {
                attack_type,
                attack_style,
                special_multiplier,
            } => {
                let melee = MeleeAttack {
                    attack_type,
                    attack_style,
                    block_type: None,
                    special_multiplier,
                };
                let offence = A::melee(&melee, &stance);
                Rolls::new(
                    melee_attack_roll(ctx.attacker, &offence),
                    magic_defence_roll(ctx.defender, MagicDefence::PLAIN),
                )
            }
            MultiStyleAttack::RangedMelee {
                attack_type,
                attack_style,
                block_type,
                special_multiplier,
            } => {
                let melee = MeleeAttack {
                    attack_type,
                    attack_style,
                    block_type: None,
                    special_multiplier,
                };
                let offence = A::melee(&melee, &stance);
                Rolls::new(
                    melee_attack_roll(ctx.attacker, &offence),
                    Self::ranged_defence(ctx.defender, block_type, &stance),
                )
            }
            MultiStyleAttack::RangedMagic {
                attack_style,
                block_type,
                special_multiplier,
            } => {
                let staff = StaffAttack {
                    attack_style,
                    special_multiplier,
                };
                let offence = A::staff(&staff, &stance);
                Rolls::new(
                    magic_attack_roll(ctx.attacker, &offence),
                    Self::ranged_defence(ctx.defender, block_type, &stance),
                )
            }
            MultiStyleAttack::MagicalRanged {
                attack_type,
                attack_style,
                special_multiplier,
            } => {
                let ranged = RangedAttack {
                    attack_type,
                    attack_style,
                    block_type: None,
                    special_multiplier,
                };
                let offence = A::ranged(&ranged, &stance);
                Rolls::new(
                    ranged_attack_roll(ctx.attacker, &offence),
                    magic_defence_roll(ctx.defender, MagicDefence::PLAIN),
                )
            }
        }
    }
}

/// Player multi-style against a player.
pub type PvPMultiStyleAccuracy = MultiStyleAccuracy<PlayerSide, PlayerSide>;
/// Player multi-style against an NPC.
pub type PvNMultiStyleAccuracy = MultiStyleAccuracy<PlayerSide, NpcSide>;
/// NPC multi-style against a player.
pub type NvPMultiStyleAccuracy = MultiStyleAccuracy<NpcSide, PlayerSide>;
/// NPC multi-style against an NPC.
pub type NvNMultiStyleAccuracy = MultiStyleAccuracy<NpcSide, NpcSide>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::AccuracyConfig;
    use crate::request::MultiStyle;
    use combat_commons::{
        BonusColumn, Channel, CombatantSnapshot, MeleeAttackStyle, MeleeAttackType,
    };

    /// Bonuses of -63 make every roll equal to its level.
    fn hybrid() -> CombatantSnapshot {
        CombatantSnapshot::new(Stance::Melee {
            attack_type: MeleeAttackType::Slash,
            attack_style: MeleeAttackStyle::Aggressive,
        })
        .with_levels(Channel::Melee, 100, 0)
        .with_levels(Channel::Ranged, 200, 0)
        .with_levels(Channel::Magic, 300, 0)
        .with_offence_bonus(BonusColumn::Slash, -63)
        .with_offence_bonus(BonusColumn::Ranged, -63)
        .with_offence_bonus(BonusColumn::Magic, -63)
    }

    fn defender() -> CombatantSnapshot {
        CombatantSnapshot::default()
            .with_levels(Channel::Melee, 0, 7)
            .with_levels(Channel::Ranged, 0, 11)
            .with_levels(Channel::Magic, 0, 13)
            .with_defence_bonus(BonusColumn::Slash, -63)
            .with_defence_bonus(BonusColumn::Ranged, -63)
            .with_defence_bonus(BonusColumn::RangedHeavy, -62)
            .with_defence_bonus(BonusColumn::Magic, -63)
    }

    fn rolls_for(attack: MultiStyleAttack) -> Rolls {
        let attacker = hybrid();
        let defender = defender();
        let config = AccuracyConfig::default();
        let ctx = AttackContext::new(&attacker, &defender, &attack, &config);
        PvNMultiStyleAccuracy::new().rolls(&ctx)
    }

    #[test]
    fn each_combo_pairs_the_right_channels() {
        let expected = [
            (MultiStyle::MagicalMelee, Rolls::new(100, 13)),
            (MultiStyle::RangedMelee, Rolls::new(100, 11)),
            (MultiStyle::RangedMagic, Rolls::new(300, 11)),
            (MultiStyle::MagicalRanged, Rolls::new(200, 13)),
        ];
        for (combo, rolls) in expected {
            assert_eq!(rolls_for(MultiStyleAttack::from_stance(combo)), rolls, "{combo:?}");
        }
    }

    #[test]
    fn ranged_block_selects_npc_column() {
        let attack = MultiStyleAttack::RangedMelee {
            attack_type: None,
            attack_style: None,
            block_type: Some(RangedAttackType::Heavy),
            special_multiplier: 2.0,
        };
        assert_eq!(rolls_for(attack), Rolls::new(200, 22));
    }

    #[test]
    fn npc_attacker_ignores_block_and_multiplier() {
        let attacker = hybrid();
        let defender = defender();
        let config = AccuracyConfig::default();
        let attack = MultiStyleAttack::RangedMelee {
            attack_type: None,
            attack_style: None,
            block_type: Some(RangedAttackType::Heavy),
            special_multiplier: 2.0,
        };
        let ctx = AttackContext::new(&attacker, &defender, &attack, &config);
        assert_eq!(NvNMultiStyleAccuracy::new().rolls(&ctx), Rolls::new(100, 11));
    }
}
