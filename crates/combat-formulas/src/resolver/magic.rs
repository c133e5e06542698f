//! Magic offence against magic defence.

use std::marker::PhantomData;

use crate::hit_chance::Rolls;
use crate::request::{ChannelKind, MagicAttack, PairKind, ResolverKey};

use super::rolls::{magic_attack_roll, magic_defence_roll};
use super::sides::{AttackerSide, DefenderSide, NpcSide, PlayerSide};
use super::{AccuracyResolver, AttackContext};

/// Magic accuracy for one attacker/defender pairing.
///
/// Spell casts may move the defence roll onto another bonus column and lower
/// the defender's magic level; both come from the [`crate::MagicReference`]
/// in the context. Staff and innate attacks always read magic defence.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicAccuracy<A, D> {
    _sides: PhantomData<fn() -> (A, D)>,
}

impl<A, D> MagicAccuracy<A, D> {
    /// Creates the resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _sides: PhantomData,
        }
    }
}

impl<A: AttackerSide, D: DefenderSide> AccuracyResolver<MagicAttack> for MagicAccuracy<A, D> {
    fn key(&self) -> ResolverKey {
        ResolverKey::new(PairKind::of(A::KIND, D::KIND), ChannelKind::Magic)
    }

    fn rolls(&self, ctx: &AttackContext<'_, MagicAttack>) -> Rolls {
        let (offence, defence) = A::magic(ctx.params, ctx.attacker, ctx.reference);
        Rolls::new(
            magic_attack_roll(ctx.attacker, &offence),
            magic_defence_roll(ctx.defender, defence),
        )
    }
}

/// Player magic against a player.
pub type PvPMagicAccuracy = MagicAccuracy<PlayerSide, PlayerSide>;
/// Player magic against an NPC.
pub type PvNMagicAccuracy = MagicAccuracy<PlayerSide, NpcSide>;
/// NPC magic against a player.
pub type NvPMagicAccuracy = MagicAccuracy<NpcSide, PlayerSide>;
/// NPC magic against an NPC.
pub type NvNMagicAccuracy = MagicAccuracy<NpcSide, NpcSide>;
