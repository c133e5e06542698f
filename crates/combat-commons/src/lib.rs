//! # Combat Commons
//!
//! Shared vocabulary for combat accuracy resolution.
//!
//! This crate holds everything the accuracy formulas consume but do not own:
//!
//! - **Attack vocabulary**: [`Channel`], attack types, attack styles,
//!   [`Spellbook`] and the active [`Stance`]
//! - **Equipment bonuses**: [`BonusColumn`] and the [`BonusTable`] lookup
//! - **Attribute capability**: [`CombatAttributes`], implemented by whatever
//!   owns combatant state, and the closed [`Combatant`] tag over it
//! - **Randomness**: the [`RandomSource`] capability and the `rand`-backed
//!   [`RngSource`]
//!
//! ## Quick Start
//!
//! ```
//! use combat_commons::{
//!     Channel, CombatAttributes, Combatant, CombatantKind, CombatantSnapshot, MeleeAttackStyle,
//!     MeleeAttackType, Stance,
//! };
//!
//! let player = CombatantSnapshot::new(Stance::Melee {
//!     attack_type: MeleeAttackType::Slash,
//!     attack_style: MeleeAttackStyle::Accurate,
//! })
//! .with_levels(Channel::Melee, 118, 99);
//!
//! let combatant = Combatant::Player(&player);
//! assert_eq!(combatant.kind(), CombatantKind::Player);
//! assert_eq!(combatant.attributes().defence_level(Channel::Melee), 99);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bonus;
pub mod combatant;
pub mod random;
pub mod snapshot;
pub mod stance;
pub mod types;

// Re-exports for convenience
pub use bonus::{BonusColumn, BonusTable};
pub use combatant::{CombatAttributes, Combatant, CombatantKind};
pub use random::{RandomSource, RngSource};
pub use snapshot::{ChannelLevels, CombatantSnapshot};
pub use stance::Stance;
pub use types::{
    Channel, MagicAttackStyle, MeleeAttackStyle, MeleeAttackType, RangedAttackStyle,
    RangedAttackType, SpellId, Spellbook,
};
