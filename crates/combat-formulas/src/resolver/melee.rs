//! Melee offence against melee defence.

use std::marker::PhantomData;

use crate::hit_chance::Rolls;
use crate::request::{ChannelKind, MeleeAttack, PairKind, ResolverKey};

use super::rolls::{melee_attack_roll, melee_defence_roll};
use super::sides::{AttackerSide, DefenderSide, NpcSide, PlayerSide};
use super::{AccuracyResolver, AttackContext};

/// Melee accuracy for one attacker/defender pairing.
///
/// The attack roll reads the resolved attack type column, the defence roll
/// the resolved block type column.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeleeAccuracy<A, D> {
    _sides: PhantomData<fn() -> (A, D)>,
}

impl<A, D> MeleeAccuracy<A, D> {
    /// Creates the resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _sides: PhantomData,
        }
    }
}

impl<A: AttackerSide, D: DefenderSide> AccuracyResolver<MeleeAttack> for MeleeAccuracy<A, D> {
    fn key(&self) -> ResolverKey {
        ResolverKey::new(PairKind::of(A::KIND, D::KIND), ChannelKind::Melee)
    }

    fn rolls(&self, ctx: &AttackContext<'_, MeleeAttack>) -> Rolls {
        let offence = A::melee(ctx.params, &ctx.attacker.stance());
        Rolls::new(
            melee_attack_roll(ctx.attacker, &offence),
            melee_defence_roll(ctx.defender, offence.block_type),
        )
    }
}

/// Player melee against a player.
pub type PvPMeleeAccuracy = MeleeAccuracy<PlayerSide, PlayerSide>;
/// Player melee against an NPC.
pub type PvNMeleeAccuracy = MeleeAccuracy<PlayerSide, NpcSide>;
/// NPC melee against a player.
pub type NvPMeleeAccuracy = MeleeAccuracy<NpcSide, PlayerSide>;
/// NPC melee against an NPC.
pub type NvNMeleeAccuracy = MeleeAccuracy<NpcSide, NpcSide>;
