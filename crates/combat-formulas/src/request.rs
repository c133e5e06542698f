//! Attack requests and dispatch keys.
//!
//! An [`AttackRequest`] pairs two [`Combatant`]s with channel-specific
//! [`Attack`] parameters. Parameters that a caller leaves as `None` are
//! filled from the attacker's stance by [`crate::defaults`] before any
//! arithmetic happens.
//!
//! # Dispatch keys
//!
//! The resolver for a request is a pure function of its [`PairKind`] (the two
//! combatant tags) and its [`ChannelKind`] (the [`Attack`] variant). Both are
//! closed enums, so [`ResolverKey::ALL`] enumerates every combination.

use std::fmt;

use combat_commons::{
    Channel, Combatant, CombatantKind, MagicAttackStyle, MeleeAttackStyle, MeleeAttackType,
    RangedAttackStyle, RangedAttackType, SpellId, Spellbook,
};
use serde::{Deserialize, Serialize};

/// Multiplier applied outside special attacks.
pub const DEFAULT_SPECIAL_MULTIPLIER: f64 = 1.0;

// =============================================================================
// Dispatch keys
// =============================================================================

/// Attacker/defender kind combination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairKind {
    /// Player attacking a player
    PlayerVsPlayer,
    /// Player attacking an NPC
    PlayerVsNpc,
    /// NPC attacking a player
    NpcVsPlayer,
    /// NPC attacking an NPC
    NpcVsNpc,
}

impl PairKind {
    /// All pair kinds.
    pub const ALL: [PairKind; 4] = [
        PairKind::PlayerVsPlayer,
        PairKind::PlayerVsNpc,
        PairKind::NpcVsPlayer,
        PairKind::NpcVsNpc,
    ];

    /// Pair kind for an attacker and defender kind.
    #[must_use]
    pub const fn of(attacker: CombatantKind, defender: CombatantKind) -> Self {
        match (attacker, defender) {
            (CombatantKind::Player, CombatantKind::Player) => Self::PlayerVsPlayer,
            (CombatantKind::Player, CombatantKind::Npc) => Self::PlayerVsNpc,
            (CombatantKind::Npc, CombatantKind::Player) => Self::NpcVsPlayer,
            (CombatantKind::Npc, CombatantKind::Npc) => Self::NpcVsNpc,
        }
    }

    /// Attacker half of the pair.
    #[must_use]
    pub const fn attacker(self) -> CombatantKind {
        match self {
            Self::PlayerVsPlayer | Self::PlayerVsNpc => CombatantKind::Player,
            Self::NpcVsPlayer | Self::NpcVsNpc => CombatantKind::Npc,
        }
    }

    /// Defender half of the pair.
    #[must_use]
    pub const fn defender(self) -> CombatantKind {
        match self {
            Self::PlayerVsPlayer | Self::NpcVsPlayer => CombatantKind::Player,
            Self::PlayerVsNpc | Self::NpcVsNpc => CombatantKind::Npc,
        }
    }

    /// Short label used in log fields (`pvp`, `pvn`, `nvp`, `nvn`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "pvp",
            Self::PlayerVsNpc => "pvn",
            Self::NpcVsPlayer => "nvp",
            Self::NpcVsNpc => "nvn",
        }
    }
}

/// Channel kinds the dispatcher routes on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Melee offence against melee defence
    Melee,
    /// Ranged offence against ranged defence
    Ranged,
    /// Magic offence against magic defence
    Magic,
    /// Offence and defence on different channels
    MultiStyle,
}

impl ChannelKind {
    /// All channel kinds.
    pub const ALL: [ChannelKind; 4] = [
        ChannelKind::Melee,
        ChannelKind::Ranged,
        ChannelKind::Magic,
        ChannelKind::MultiStyle,
    ];

    /// Short label used in log fields.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Melee => "melee",
            Self::Ranged => "ranged",
            Self::Magic => "magic",
            Self::MultiStyle => "multi",
        }
    }
}

/// Identifies one of the sixteen resolvers.
///
/// # Example
///
/// ```
/// use combat_formulas::{ChannelKind, PairKind, ResolverKey};
///
/// let key = ResolverKey::new(PairKind::PlayerVsNpc, ChannelKind::Melee);
/// assert_eq!(key.to_string(), "pvn_melee");
/// assert_eq!(ResolverKey::ALL.len(), 16);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResolverKey {
    /// Attacker/defender kinds
    pub pair: PairKind,
    /// Channel kind
    pub channel: ChannelKind,
}

impl ResolverKey {
    /// Every pair × channel combination, pair-major.
    pub const ALL: [ResolverKey; 16] = {
        let mut keys = [ResolverKey::new(PairKind::PlayerVsPlayer, ChannelKind::Melee); 16];
        let mut i = 0;
        while i < 16 {
            keys[i] = ResolverKey::new(PairKind::ALL[i / 4], ChannelKind::ALL[i % 4]);
            i += 1;
        }
        keys
    };

    /// Creates a key.
    #[must_use]
    pub const fn new(pair: PairKind, channel: ChannelKind) -> Self {
        Self { pair, channel }
    }
}

impl fmt::Display for ResolverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.pair.label(), self.channel.label())
    }
}

// =============================================================================
// Attack parameters
// =============================================================================

/// Melee attack parameters.
///
/// `None` fields are resolved from the attacker's stance. `block_type`
/// defaults to the resolved `attack_type`; special attacks may force a
/// different one.
///
/// # Example
///
/// ```
/// use combat_formulas::MeleeAttack;
/// use combat_commons::MeleeAttackType;
///
/// // A slash-blocked special attack with 25% extra accuracy.
/// let special = MeleeAttack::default()
///     .with_block_type(MeleeAttackType::Slash)
///     .with_special_multiplier(1.25);
/// assert_eq!(special.attack_type, None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeleeAttack {
    /// Attack type used for the offence bonus
    pub attack_type: Option<MeleeAttackType>,
    /// Combat style used for the effective attack level
    pub attack_style: Option<MeleeAttackStyle>,
    /// Attack type used for the defence bonus
    pub block_type: Option<MeleeAttackType>,
    /// Multiplier applied to the attack roll
    pub special_multiplier: f64,
}

impl Default for MeleeAttack {
    fn default() -> Self {
        Self {
            attack_type: None,
            attack_style: None,
            block_type: None,
            special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
        }
    }
}

impl MeleeAttack {
    /// Overrides the attack type.
    #[must_use]
    pub fn with_attack_type(mut self, attack_type: MeleeAttackType) -> Self {
        self.attack_type = Some(attack_type);
        self
    }

    /// Overrides the combat style.
    #[must_use]
    pub fn with_attack_style(mut self, attack_style: MeleeAttackStyle) -> Self {
        self.attack_style = Some(attack_style);
        self
    }

    /// Overrides the block type.
    #[must_use]
    pub fn with_block_type(mut self, block_type: MeleeAttackType) -> Self {
        self.block_type = Some(block_type);
        self
    }

    /// Sets the special attack multiplier.
    #[must_use]
    pub fn with_special_multiplier(mut self, multiplier: f64) -> Self {
        self.special_multiplier = multiplier;
        self
    }
}

/// Ranged attack parameters, resolved like [`MeleeAttack`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangedAttack {
    /// Ammunition type, the default block type
    pub attack_type: Option<RangedAttackType>,
    /// Combat style used for the effective ranged level
    pub attack_style: Option<RangedAttackStyle>,
    /// Ammunition type used for the defence bonus
    pub block_type: Option<RangedAttackType>,
    /// Multiplier applied to the attack roll
    pub special_multiplier: f64,
}

impl Default for RangedAttack {
    fn default() -> Self {
        Self {
            attack_type: None,
            attack_style: None,
            block_type: None,
            special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
        }
    }
}

impl RangedAttack {
    /// Overrides the attack type.
    #[must_use]
    pub fn with_attack_type(mut self, attack_type: RangedAttackType) -> Self {
        self.attack_type = Some(attack_type);
        self
    }

    /// Overrides the combat style.
    #[must_use]
    pub fn with_attack_style(mut self, attack_style: RangedAttackStyle) -> Self {
        self.attack_style = Some(attack_style);
        self
    }

    /// Overrides the block type.
    #[must_use]
    pub fn with_block_type(mut self, block_type: RangedAttackType) -> Self {
        self.block_type = Some(block_type);
        self
    }

    /// Sets the special attack multiplier.
    #[must_use]
    pub fn with_special_multiplier(mut self, multiplier: f64) -> Self {
        self.special_multiplier = multiplier;
        self
    }
}

/// A spell cast by a player.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCast {
    /// The spell, passed through to reference data
    pub spell: SpellId,
    /// Spellbook override; `None` reads the caster's current spellbook
    #[serde(default)]
    pub spellbook: Option<Spellbook>,
    /// Whether a sunfire rune was consumed for this cast
    #[serde(default)]
    pub used_sunfire_rune: bool,
}

impl SpellCast {
    /// A cast of `spell` from the caster's current spellbook.
    #[must_use]
    pub const fn new(spell: SpellId) -> Self {
        Self {
            spell,
            spellbook: None,
            used_sunfire_rune: false,
        }
    }

    /// Overrides the spellbook.
    #[must_use]
    pub const fn with_spellbook(mut self, spellbook: Spellbook) -> Self {
        self.spellbook = Some(spellbook);
        self
    }

    /// Marks the cast as using a sunfire rune.
    #[must_use]
    pub const fn with_sunfire_rune(mut self) -> Self {
        self.used_sunfire_rune = true;
        self
    }
}

/// A powered staff attack by a player.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffAttack {
    /// Combat style; `None` reads the stance
    pub attack_style: Option<MagicAttackStyle>,
    /// Multiplier applied to the attack roll
    pub special_multiplier: f64,
}

impl Default for StaffAttack {
    fn default() -> Self {
        Self {
            attack_style: None,
            special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
        }
    }
}

/// Magic attack parameters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagicAttack {
    /// A player casting a spell
    Spell(SpellCast),
    /// A player attacking with a powered staff
    Staff(StaffAttack),
    /// Magic from the attacker's own configuration (NPC magic attacks)
    Innate,
}

/// The four channel combinations a multi-style attack can take.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiStyle {
    /// Melee offence against magic defence
    MagicalMelee,
    /// Melee offence against ranged defence
    RangedMelee,
    /// Magic offence against ranged defence
    RangedMagic,
    /// Ranged offence against magic defence
    MagicalRanged,
}

impl MultiStyle {
    /// All combinations.
    pub const ALL: [MultiStyle; 4] = [
        MultiStyle::MagicalMelee,
        MultiStyle::RangedMelee,
        MultiStyle::RangedMagic,
        MultiStyle::MagicalRanged,
    ];

    /// Channel the attack roll is read from.
    #[must_use]
    pub const fn offence_channel(self) -> Channel {
        match self {
            Self::MagicalMelee | Self::RangedMelee => Channel::Melee,
            Self::RangedMagic => Channel::Magic,
            Self::MagicalRanged => Channel::Ranged,
        }
    }

    /// Channel the defence roll is read from.
    #[must_use]
    pub const fn defence_channel(self) -> Channel {
        match self {
            Self::MagicalMelee | Self::MagicalRanged => Channel::Magic,
            Self::RangedMelee | Self::RangedMagic => Channel::Ranged,
        }
    }
}

/// Multi-style attack parameters, one variant per [`MultiStyle`].
///
/// Each variant carries the offence channel's type/style and, where the
/// defence channel has one, its block type.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "combo", rename_all = "snake_case")]
pub enum MultiStyleAttack {
    /// Melee offence against magic defence
    MagicalMelee {
        /// Melee attack type; `None` reads the stance
        attack_type: Option<MeleeAttackType>,
        /// Melee style; `None` reads the stance
        attack_style: Option<MeleeAttackStyle>,
        /// Multiplier applied to the attack roll
        special_multiplier: f64,
    },
    /// Melee offence against ranged defence
    RangedMelee {
        /// Melee attack type; `None` reads the stance
        attack_type: Option<MeleeAttackType>,
        /// Melee style; `None` reads the stance
        attack_style: Option<MeleeAttackStyle>,
        /// Ranged defence column; `None` reads untyped ranged defence
        block_type: Option<RangedAttackType>,
        /// Multiplier applied to the attack roll
        special_multiplier: f64,
    },
    /// Magic offence against ranged defence
    RangedMagic {
        /// Magic style; `None` reads the stance
        attack_style: Option<MagicAttackStyle>,
        /// Ranged defence column; `None` reads untyped ranged defence
        block_type: Option<RangedAttackType>,
        /// Multiplier applied to the attack roll
        special_multiplier: f64,
    },
    /// Ranged offence against magic defence
    MagicalRanged {
        /// Ranged attack type; `None` reads the stance
        attack_type: Option<RangedAttackType>,
        /// Ranged style; `None` reads the stance
        attack_style: Option<RangedAttackStyle>,
        /// Multiplier applied to the attack roll
        special_multiplier: f64,
    },
}

impl MultiStyleAttack {
    /// Parameters for `combo` with everything read from the stance.
    #[must_use]
    pub const fn from_stance(combo: MultiStyle) -> Self {
        match combo {
            MultiStyle::MagicalMelee => Self::MagicalMelee {
                attack_type: None,
                attack_style: None,
                special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
            },
            MultiStyle::RangedMelee => Self::RangedMelee {
                attack_type: None,
                attack_style: None,
                block_type: None,
                special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
            },
            MultiStyle::RangedMagic => Self::RangedMagic {
                attack_style: None,
                block_type: None,
                special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
            },
            MultiStyle::MagicalRanged => Self::MagicalRanged {
                attack_type: None,
                attack_style: None,
                special_multiplier: DEFAULT_SPECIAL_MULTIPLIER,
            },
        }
    }

    /// Which combination these parameters describe.
    #[must_use]
    pub const fn combo(&self) -> MultiStyle {
        match self {
            Self::MagicalMelee { .. } => MultiStyle::MagicalMelee,
            Self::RangedMelee { .. } => MultiStyle::RangedMelee,
            Self::RangedMagic { .. } => MultiStyle::RangedMagic,
            Self::MagicalRanged { .. } => MultiStyle::MagicalRanged,
        }
    }
}

/// Channel-specific attack parameters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attack {
    /// Melee attack
    Melee(MeleeAttack),
    /// Ranged attack
    Ranged(RangedAttack),
    /// Spell, staff or innate magic attack
    Magic(MagicAttack),
    /// Hybrid attack across two channels
    MultiStyle(MultiStyleAttack),
}

impl Attack {
    /// Channel kind the dispatcher routes this attack on.
    #[must_use]
    pub const fn channel(&self) -> ChannelKind {
        match self {
            Self::Melee(_) => ChannelKind::Melee,
            Self::Ranged(_) => ChannelKind::Ranged,
            Self::Magic(_) => ChannelKind::Magic,
            Self::MultiStyle(_) => ChannelKind::MultiStyle,
        }
    }
}

// =============================================================================
// Request
// =============================================================================

/// A single accuracy evaluation.
#[derive(Debug, Clone, Copy)]
pub struct AttackRequest<'a> {
    /// Attacking combatant
    pub attacker: Combatant<'a>,
    /// Defending combatant
    pub defender: Combatant<'a>,
    /// Channel-specific parameters
    pub attack: Attack,
}

impl<'a> AttackRequest<'a> {
    /// Creates a request.
    #[must_use]
    pub const fn new(attacker: Combatant<'a>, defender: Combatant<'a>, attack: Attack) -> Self {
        Self {
            attacker,
            defender,
            attack,
        }
    }

    /// Attacker/defender kind combination.
    #[must_use]
    pub const fn pair(&self) -> PairKind {
        PairKind::of(self.attacker.kind(), self.defender.kind())
    }

    /// Key of the resolver that handles this request.
    #[must_use]
    pub const fn key(&self) -> ResolverKey {
        ResolverKey::new(self.pair(), self.attack.channel())
    }
}
