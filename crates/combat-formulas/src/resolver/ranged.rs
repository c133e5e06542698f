//! Ranged offence against ranged defence.

use std::marker::PhantomData;

use crate::hit_chance::Rolls;
use crate::request::{ChannelKind, PairKind, RangedAttack, ResolverKey};

use super::rolls::{ranged_attack_roll, ranged_defence_roll};
use super::sides::{AttackerSide, DefenderSide, NpcSide, PlayerSide};
use super::{AccuracyResolver, AttackContext};

/// Ranged accuracy for one attacker/defender pairing.
///
/// Offence always reads the ranged column. The defence column depends on the
/// defender: players have one ranged bonus, NPCs one per ammunition type.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangedAccuracy<A, D> {
    _sides: PhantomData<fn() -> (A, D)>,
}

impl<A, D> RangedAccuracy<A, D> {
    /// Creates the resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _sides: PhantomData,
        }
    }
}

impl<A: AttackerSide, D: DefenderSide> AccuracyResolver<RangedAttack> for RangedAccuracy<A, D> {
    fn key(&self) -> ResolverKey {
        ResolverKey::new(PairKind::of(A::KIND, D::KIND), ChannelKind::Ranged)
    }

    fn rolls(&self, ctx: &AttackContext<'_, RangedAttack>) -> Rolls {
        let offence = A::ranged(ctx.params, &ctx.attacker.stance());
        Rolls::new(
            ranged_attack_roll(ctx.attacker, &offence),
            ranged_defence_roll(ctx.defender, D::ranged_column(offence.block_type)),
        )
    }
}

/// Player ranged against a player.
pub type PvPRangedAccuracy = RangedAccuracy<PlayerSide, PlayerSide>;
/// Player ranged against an NPC.
pub type PvNRangedAccuracy = RangedAccuracy<PlayerSide, NpcSide>;
/// NPC ranged against a player.
pub type NvPRangedAccuracy = RangedAccuracy<NpcSide, PlayerSide>;
/// NPC ranged against an NPC.
pub type NvNRangedAccuracy = RangedAccuracy<NpcSide, NpcSide>;
