//! Accuracy resolvers.
//!
//! Each channel has one formula ([`MeleeAccuracy`], [`RangedAccuracy`],
//! [`MagicAccuracy`], [`MultiStyleAccuracy`]) parameterised by an
//! [`AttackerSide`] and a [`DefenderSide`]. The sides decide where attack
//! types, styles and bonus columns come from; the formula decides which
//! channel each roll is read from. Together they give the sixteen
//! pair × channel resolvers, exported under aliases such as
//! [`PvNMeleeAccuracy`].
//!
//! Resolvers are stateless and `Send + Sync`. Every evaluation reads the
//! combatants through [`CombatAttributes`] and nothing else; no resolver
//! draws randomness.
//!
//! ## Resolution
//!
//! 1. Resolve absent request parameters from the attacker's stance
//!    ([`crate::defaults`])
//! 2. Attack roll: `effective level * (offence bonus + 64)`, times the
//!    special multiplier, floored
//! 3. Defence roll: `effective defence level * (defence bonus + 64)`
//! 4. [`Rolls::hit_chance`]

mod magic;
mod melee;
mod multi;
mod ranged;
pub mod rolls;
pub mod sides;

pub use magic::{
    MagicAccuracy, NvNMagicAccuracy, NvPMagicAccuracy, PvNMagicAccuracy, PvPMagicAccuracy,
};
pub use melee::{
    MeleeAccuracy, NvNMeleeAccuracy, NvPMeleeAccuracy, PvNMeleeAccuracy, PvPMeleeAccuracy,
};
pub use multi::{
    MultiStyleAccuracy, NvNMultiStyleAccuracy, NvPMultiStyleAccuracy, PvNMultiStyleAccuracy,
    PvPMultiStyleAccuracy,
};
pub use ranged::{
    NvNRangedAccuracy, NvPRangedAccuracy, PvNRangedAccuracy, PvPRangedAccuracy, RangedAccuracy,
};
pub use rolls::MagicDefence;
pub use sides::{AttackerSide, DefenderSide, NpcSide, PlayerSide};

use combat_commons::CombatAttributes;

use crate::hit_chance::{HitChance, Rolls};
use crate::reference::MagicReference;
use crate::request::{
    MagicAttack, MeleeAttack, MultiStyleAttack, PairKind, RangedAttack, ResolverKey,
};

// =============================================================================
// Resolver trait
// =============================================================================

/// Everything a resolver reads for one evaluation.
#[derive(Clone, Copy)]
pub struct AttackContext<'a, P> {
    /// Attacking combatant's attributes
    pub attacker: &'a dyn CombatAttributes,
    /// Defending combatant's attributes
    pub defender: &'a dyn CombatAttributes,
    /// Channel-specific attack parameters
    pub params: &'a P,
    /// Magic reference data
    pub reference: &'a dyn MagicReference,
}

impl<'a, P> AttackContext<'a, P> {
    /// Creates a context.
    #[must_use]
    pub fn new(
        attacker: &'a dyn CombatAttributes,
        defender: &'a dyn CombatAttributes,
        params: &'a P,
        reference: &'a dyn MagicReference,
    ) -> Self {
        Self {
            attacker,
            defender,
            params,
            reference,
        }
    }
}

/// A hit-chance formula for one pair × channel combination.
pub trait AccuracyResolver<P>: Send + Sync {
    /// Which combination this resolver handles.
    fn key(&self) -> ResolverKey;

    /// Attack and defence rolls for an evaluation.
    fn rolls(&self, ctx: &AttackContext<'_, P>) -> Rolls;

    /// Hit chance for an evaluation.
    fn hit_chance(&self, ctx: &AttackContext<'_, P>) -> HitChance {
        self.rolls(ctx).hit_chance()
    }
}

// =============================================================================
// Resolver table
// =============================================================================

static PVP_MELEE: PvPMeleeAccuracy = MeleeAccuracy::new();
static PVN_MELEE: PvNMeleeAccuracy = MeleeAccuracy::new();
static NVP_MELEE: NvPMeleeAccuracy = MeleeAccuracy::new();
static NVN_MELEE: NvNMeleeAccuracy = MeleeAccuracy::new();

static PVP_RANGED: PvPRangedAccuracy = RangedAccuracy::new();
static PVN_RANGED: PvNRangedAccuracy = RangedAccuracy::new();
static NVP_RANGED: NvPRangedAccuracy = RangedAccuracy::new();
static NVN_RANGED: NvNRangedAccuracy = RangedAccuracy::new();

static PVP_MAGIC: PvPMagicAccuracy = MagicAccuracy::new();
static PVN_MAGIC: PvNMagicAccuracy = MagicAccuracy::new();
static NVP_MAGIC: NvPMagicAccuracy = MagicAccuracy::new();
static NVN_MAGIC: NvNMagicAccuracy = MagicAccuracy::new();

static PVP_MULTI: PvPMultiStyleAccuracy = MultiStyleAccuracy::new();
static PVN_MULTI: PvNMultiStyleAccuracy = MultiStyleAccuracy::new();
static NVP_MULTI: NvPMultiStyleAccuracy = MultiStyleAccuracy::new();
static NVN_MULTI: NvNMultiStyleAccuracy = MultiStyleAccuracy::new();

/// The melee resolver for `pair`.
#[must_use]
pub fn melee(pair: PairKind) -> &'static dyn AccuracyResolver<MeleeAttack> {
    match pair {
        PairKind::PlayerVsPlayer => &PVP_MELEE,
        PairKind::PlayerVsNpc => &PVN_MELEE,
        PairKind::NpcVsPlayer => &NVP_MELEE,
        PairKind::NpcVsNpc => &NVN_MELEE,
    }
}

/// The ranged resolver for `pair`.
#[must_use]
pub fn ranged(pair: PairKind) -> &'static dyn AccuracyResolver<RangedAttack> {
    match pair {
        PairKind::PlayerVsPlayer => &PVP_RANGED,
        PairKind::PlayerVsNpc => &PVN_RANGED,
        PairKind::NpcVsPlayer => &NVP_RANGED,
        PairKind::NpcVsNpc => &NVN_RANGED,
    }
}

/// The magic resolver for `pair`.
#[must_use]
pub fn magic(pair: PairKind) -> &'static dyn AccuracyResolver<MagicAttack> {
    match pair {
        PairKind::PlayerVsPlayer => &PVP_MAGIC,
        PairKind::PlayerVsNpc => &PVN_MAGIC,
        PairKind::NpcVsPlayer => &NVP_MAGIC,
        PairKind::NpcVsNpc => &NVN_MAGIC,
    }
}

/// The multi-style resolver for `pair`.
#[must_use]
pub fn multi_style(pair: PairKind) -> &'static dyn AccuracyResolver<MultiStyleAttack> {
    match pair {
        PairKind::PlayerVsPlayer => &PVP_MULTI,
        PairKind::PlayerVsNpc => &PVN_MULTI,
        PairKind::NpcVsPlayer => &NVP_MULTI,
        PairKind::NpcVsNpc => &NVN_MULTI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::helpers::table_key;

    #[test]
    fn table_covers_every_key() {
        for key in ResolverKey::ALL {
            assert_eq!(table_key(key), key, "table entry for {key}");
        }
    }

    #[test]
    fn resolvers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<PvPMeleeAccuracy>(), 0);
        assert_eq!(std::mem::size_of::<NvNMultiStyleAccuracy>(), 0);
    }
}
