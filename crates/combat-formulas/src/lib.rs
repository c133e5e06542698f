//! # Combat Formulas
//!
//! Accuracy resolution for combat: the probability that an attack lands, and
//! the single random roll that decides it.
//!
//! ## Architecture
//!
//! - **Dispatcher**: [`AccuracyFormulae`] picks a resolver from the
//!   attacker/defender tags and the attack variant
//! - **Resolvers**: four channel formulas × two attacker sides × two defender
//!   sides ([`resolver`])
//! - **Reduction**: [`HitChance::from_rolls`] turns attack and defence rolls
//!   into a chance out of [`HIT_CHANCE_SCALE`]
//! - **Hit roll**: [`is_successful_hit`] draws once from a caller-supplied
//!   [`combat_commons::RandomSource`]
//!
//! Magic reference data (sunfire reduction, spellbook defence columns) lives
//! in [`AccuracyConfig`] behind the [`MagicReference`] trait.
//!
//! ## Usage
//!
//! ```
//! use combat_commons::{
//!     BonusColumn, Channel, Combatant, CombatantSnapshot, MagicAttackStyle, SpellId, Stance,
//! };
//! use combat_formulas::{AccuracyFormulae, SpellCast};
//!
//! let caster = CombatantSnapshot::new(Stance::Magic {
//!     attack_style: MagicAttackStyle::Accurate,
//! })
//! .with_levels(Channel::Magic, 50, 1)
//! .with_offence_bonus(BonusColumn::Magic, -63);
//! let guard = CombatantSnapshot::default()
//!     .with_levels(Channel::Magic, 1, 100)
//!     .with_defence_bonus(BonusColumn::Magic, -63);
//!
//! let formulae = AccuracyFormulae::default();
//! let chance = formulae.spell_hit_chance(
//!     Combatant::Player(&caster),
//!     Combatant::Npc(&guard),
//!     SpellCast::new(SpellId::new(1)),
//! );
//! assert_eq!(chance.get(), 2475);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod formulae;
pub mod hit_chance;
pub mod hit_roll;
pub mod reference;
pub mod request;
pub mod resolver;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use formulae::AccuracyFormulae;
pub use hit_chance::{HitChance, Rolls, HIT_CHANCE_SCALE};
pub use hit_roll::is_successful_hit;
pub use reference::{AccuracyConfig, ConfigError, MagicReference, SpellbookColumns};
pub use request::{
    Attack, AttackRequest, ChannelKind, MagicAttack, MeleeAttack, MultiStyle, MultiStyleAttack,
    PairKind, RangedAttack, ResolverKey, SpellCast, StaffAttack, DEFAULT_SPECIAL_MULTIPLIER,
};
pub use resolver::{AccuracyResolver, AttackContext};
