//! The accuracy dispatcher.
//!
//! [`AccuracyFormulae`] is the single entry point callers use. It selects the
//! resolver for a request from the two combatant tags and the attack
//! variant, evaluates it against its [`MagicReference`], and optionally
//! decides the hit with a caller-supplied [`RandomSource`].
//!
//! # Example
//!
//! ```
//! use combat_commons::{
//!     BonusColumn, Channel, Combatant, CombatantSnapshot, MeleeAttackStyle, MeleeAttackType,
//!     RngSource, Stance,
//! };
//! use combat_formulas::{AccuracyFormulae, MeleeAttack};
//!
//! let player = CombatantSnapshot::new(Stance::Melee {
//!     attack_type: MeleeAttackType::Slash,
//!     attack_style: MeleeAttackStyle::Accurate,
//! })
//! .with_levels(Channel::Melee, 100, 1)
//! .with_offence_bonus(BonusColumn::Slash, -63);
//! let goblin = CombatantSnapshot::default()
//!     .with_levels(Channel::Melee, 1, 50)
//!     .with_defence_bonus(BonusColumn::Slash, -63);
//!
//! let formulae = AccuracyFormulae::default();
//! let chance = formulae.melee_hit_chance(
//!     Combatant::Player(&player),
//!     Combatant::Npc(&goblin),
//!     MeleeAttack::default(),
//! );
//! assert_eq!(chance.get(), 7426);
//!
//! let mut random = RngSource::seeded(7);
//! let _hit = formulae.roll_melee_accuracy(
//!     Combatant::Player(&player),
//!     Combatant::Npc(&goblin),
//!     MeleeAttack::default(),
//!     &mut random,
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use combat_commons::{
    Combatant, MagicAttackStyle, MeleeAttackStyle, MeleeAttackType, RandomSource,
    RangedAttackStyle, RangedAttackType,
};
use tracing::trace;

use crate::hit_chance::{HitChance, Rolls};
use crate::hit_roll::is_successful_hit;
use crate::reference::{AccuracyConfig, MagicReference};
use crate::request::{
    Attack, AttackRequest, MagicAttack, MeleeAttack, MultiStyleAttack, RangedAttack, SpellCast,
    StaffAttack,
};
use crate::resolver::{self, AttackContext};

/// Selects and evaluates accuracy resolvers.
///
/// Holds only immutable reference data, so one instance can be shared across
/// threads; each caller brings its own randomness.
#[derive(Clone)]
pub struct AccuracyFormulae {
    reference: Arc<dyn MagicReference>,
}

impl fmt::Debug for AccuracyFormulae {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccuracyFormulae").finish_non_exhaustive()
    }
}

impl Default for AccuracyFormulae {
    fn default() -> Self {
        Self::from_config(AccuracyConfig::default())
    }
}

impl AccuracyFormulae {
    /// Creates a dispatcher over shared reference data.
    #[must_use]
    pub fn new(reference: Arc<dyn MagicReference>) -> Self {
        Self { reference }
    }

    /// Creates a dispatcher that owns `config`.
    #[must_use]
    pub fn from_config(config: AccuracyConfig) -> Self {
        Self::new(Arc::new(config))
    }

    /// Reference data used for spell casts.
    #[must_use]
    pub fn reference(&self) -> &dyn MagicReference {
        self.reference.as_ref()
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Attack and defence rolls for `request`.
    #[must_use]
    pub fn rolls(&self, request: &AttackRequest<'_>) -> Rolls {
        let attacker = request.attacker.attributes();
        let defender = request.defender.attributes();
        let reference = self.reference.as_ref();
        let pair = request.pair();

        match &request.attack {
            Attack::Melee(params) => resolver::melee(pair)
                .rolls(&AttackContext::new(attacker, defender, params, reference)),
            Attack::Ranged(params) => resolver::ranged(pair)
                .rolls(&AttackContext::new(attacker, defender, params, reference)),
            Attack::Magic(params) => resolver::magic(pair)
                .rolls(&AttackContext::new(attacker, defender, params, reference)),
            Attack::MultiStyle(params) => resolver::multi_style(pair)
                .rolls(&AttackContext::new(attacker, defender, params, reference)),
        }
    }

    /// Hit chance for `request`.
    #[must_use]
    pub fn hit_chance(&self, request: &AttackRequest<'_>) -> HitChance {
        let rolls = self.rolls(request);
        let chance = rolls.hit_chance();
        trace!(
            resolver = %request.key(),
            attack_roll = rolls.attack,
            defence_roll = rolls.defence,
            hit_chance = chance.get(),
            "Evaluated accuracy"
        );
        chance
    }

    /// Decides whether `request` hits.
    pub fn roll<R: RandomSource + ?Sized>(
        &self,
        request: &AttackRequest<'_>,
        random: &mut R,
    ) -> bool {
        is_successful_hit(self.hit_chance(request), random)
    }

    fn evaluate(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack: Attack,
    ) -> HitChance {
        self.hit_chance(&AttackRequest::new(attacker, defender, attack))
    }

    // =========================================================================
    // Single-channel attacks
    // =========================================================================

    /// Melee hit chance.
    #[must_use]
    pub fn melee_hit_chance(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack: MeleeAttack,
    ) -> HitChance {
        self.evaluate(attacker, defender, Attack::Melee(attack))
    }

    /// Rolls a melee attack.
    pub fn roll_melee_accuracy<R: RandomSource + ?Sized>(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack: MeleeAttack,
        random: &mut R,
    ) -> bool {
        is_successful_hit(self.melee_hit_chance(attacker, defender, attack), random)
    }

    /// Ranged hit chance.
    #[must_use]
    pub fn ranged_hit_chance(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack: RangedAttack,
    ) -> HitChance {
        self.evaluate(attacker, defender, Attack::Ranged(attack))
    }

    /// Rolls a ranged attack.
    pub fn roll_ranged_accuracy<R: RandomSource + ?Sized>(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack: RangedAttack,
        random: &mut R,
    ) -> bool {
        is_successful_hit(self.ranged_hit_chance(attacker, defender, attack), random)
    }

    /// Hit chance of a player's spell cast.
    ///
    /// An NPC attacker's cast is evaluated as innate magic.
    #[must_use]
    pub fn spell_hit_chance(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        cast: SpellCast,
    ) -> HitChance {
        self.evaluate(attacker, defender, Attack::Magic(MagicAttack::Spell(cast)))
    }

    /// Rolls a spell cast.
    pub fn roll_spell_accuracy<R: RandomSource + ?Sized>(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        cast: SpellCast,
        random: &mut R,
    ) -> bool {
        is_successful_hit(self.spell_hit_chance(attacker, defender, cast), random)
    }

    /// Hit chance of a player's powered staff attack.
    #[must_use]
    pub fn staff_hit_chance(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack: StaffAttack,
    ) -> HitChance {
        self.evaluate(attacker, defender, Attack::Magic(MagicAttack::Staff(attack)))
    }

    /// Rolls a powered staff attack.
    pub fn roll_staff_accuracy<R: RandomSource + ?Sized>(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack: StaffAttack,
        random: &mut R,
    ) -> bool {
        is_successful_hit(self.staff_hit_chance(attacker, defender, attack), random)
    }

    /// Hit chance of an NPC's magic attack.
    #[must_use]
    pub fn magic_hit_chance(&self, attacker: Combatant<'_>, defender: Combatant<'_>) -> HitChance {
        self.evaluate(attacker, defender, Attack::Magic(MagicAttack::Innate))
    }

    /// Rolls an NPC's magic attack.
    pub fn roll_magic_accuracy<R: RandomSource + ?Sized>(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        random: &mut R,
    ) -> bool {
        is_successful_hit(self.magic_hit_chance(attacker, defender), random)
    }

    // =========================================================================
    // Multi-style attacks
    // =========================================================================

    /// Melee offence against magic defence.
    #[must_use]
    pub fn magical_melee_hit_chance(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack_type: Option<MeleeAttackType>,
        attack_style: Option<MeleeAttackStyle>,
        special_multiplier: f64,
    ) -> HitChance {
        let attack = MultiStyleAttack::MagicalMelee {
            attack_type,
            attack_style,
            special_multiplier,
        };
        self.evaluate(attacker, defender, Attack::MultiStyle(attack))
    }

    /// Rolls melee offence against magic defence.
    pub fn roll_magical_melee_accuracy<R: RandomSource + ?Sized>(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack_type: Option<MeleeAttackType>,
        attack_style: Option<MeleeAttackStyle>,
        special_multiplier: f64,
        random: &mut R,
    ) -> bool {
        let chance = self.magical_melee_hit_chance(
            attacker,
            defender,
            attack_type,
            attack_style,
            special_multiplier,
        );
        is_successful_hit(chance, random)
    }

    /// Melee offence against ranged defence.
    #[must_use]
    pub fn ranged_melee_hit_chance(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack_type: Option<MeleeAttackType>,
        attack_style: Option<MeleeAttackStyle>,
        block_type: Option<RangedAttackType>,
        special_multiplier: f64,
    ) -> HitChance {
        let attack = MultiStyleAttack::RangedMelee {
            attack_type,
            attack_style,
            block_type,
            special_multiplier,
        };
        self.evaluate(attacker, defender, Attack::MultiStyle(attack))
    }

    /// Rolls melee offence against ranged defence.
    #[allow(clippy::too_many_arguments)]
    pub fn roll_ranged_melee_accuracy<R: RandomSource + ?Sized>(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack_type: Option<MeleeAttackType>,
        attack_style: Option<MeleeAttackStyle>,
        block_type: Option<RangedAttackType>,
        special_multiplier: f64,
        random: &mut R,
    ) -> bool {
        let chance = self.ranged_melee_hit_chance(
            attacker,
            defender,
            attack_type,
            attack_style,
            block_type,
            special_multiplier,
        );
        is_successful_hit(chance, random)
    }

    /// Magic offence against ranged defence.
    #[must_use]
    pub fn ranged_magic_hit_chance(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack_style: Option<MagicAttackStyle>,
        block_type: Option<RangedAttackType>,
        special_multiplier: f64,
    ) -> HitChance {
        let attack = MultiStyleAttack::RangedMagic {
            attack_style,
            block_type,
            special_multiplier,
        };
        self.evaluate(attacker, defender, Attack::MultiStyle(attack))
    }

    /// Rolls magic offence against ranged defence.
    pub fn roll_ranged_magic_accuracy<R: RandomSource + ?Sized>(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack_style: Option<MagicAttackStyle>,
        block_type: Option<RangedAttackType>,
        special_multiplier: f64,
        random: &mut R,
    ) -> bool {
        let chance = self.ranged_magic_hit_chance(
            attacker,
            defender,
            attack_style,
            block_type,
            special_multiplier,
        );
        is_successful_hit(chance, random)
    }

    /// Ranged offence against magic defence.
    #[must_use]
    pub fn magical_ranged_hit_chance(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack_type: Option<RangedAttackType>,
        attack_style: Option<RangedAttackStyle>,
        special_multiplier: f64,
    ) -> HitChance {
        let attack = MultiStyleAttack::MagicalRanged {
            attack_type,
            attack_style,
            special_multiplier,
        };
        self.evaluate(attacker, defender, Attack::MultiStyle(attack))
    }

    /// Rolls ranged offence against magic defence.
    pub fn roll_magical_ranged_accuracy<R: RandomSource + ?Sized>(
        &self,
        attacker: Combatant<'_>,
        defender: Combatant<'_>,
        attack_type: Option<RangedAttackType>,
        attack_style: Option<RangedAttackStyle>,
        special_multiplier: f64,
        random: &mut R,
    ) -> bool {
        let chance = self.magical_ranged_hit_chance(
            attacker,
            defender,
            attack_type,
            attack_style,
            special_multiplier,
        );
        is_successful_hit(chance, random)
    }
}
