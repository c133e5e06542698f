//! Fixtures for accuracy scenarios.
//!
//! Most fixtures set every bonus to `-63`, which makes each roll equal to the
//! effective level. Scenarios can then state rolls directly as levels.

use combat_commons::{
    BonusColumn, BonusTable, Channel, CombatAttributes, Combatant, CombatantKind,
    CombatantSnapshot, MagicAttackStyle, MeleeAttackStyle, MeleeAttackType, RandomSource,
    RangedAttackStyle, RangedAttackType, SpellId, Stance,
};

use crate::request::{
    Attack, AttackRequest, ChannelKind, MagicAttack, MeleeAttack, MultiStyle, MultiStyleAttack,
    RangedAttack, ResolverKey, SpellCast, StaffAttack,
};
use crate::resolver::{self, AccuracyResolver};

// =============================================================================
// Snapshots
// =============================================================================

/// Bonus that turns `level * (bonus + 64)` into `level`.
pub const UNIT_BONUS: i32 = -63;

/// A bonus table with the same value in every column.
pub fn flat_bonuses(value: i32) -> BonusTable {
    BonusTable {
        stab: value,
        slash: value,
        crush: value,
        ranged: value,
        ranged_light: value,
        ranged_standard: value,
        ranged_heavy: value,
        magic: value,
    }
}

/// A snapshot in `stance` whose rolls equal its levels.
pub fn unit_snapshot(stance: Stance) -> CombatantSnapshot {
    CombatantSnapshot {
        offence_bonuses: flat_bonuses(UNIT_BONUS),
        defence_bonuses: flat_bonuses(UNIT_BONUS),
        ..CombatantSnapshot::new(stance)
    }
}

/// An attacker whose `channel` attack roll is `roll`.
pub fn attacker_with_roll(channel: Channel, roll: i32) -> CombatantSnapshot {
    unit_snapshot(stance_for(channel)).with_levels(channel, roll, 0)
}

/// A defender whose `channel` defence roll is `roll`.
pub fn defender_with_roll(channel: Channel, roll: i32) -> CombatantSnapshot {
    unit_snapshot(Stance::default()).with_levels(channel, 0, roll)
}

/// A defender with distinct defence rolls on every channel.
pub fn layered_defender(melee: i32, ranged: i32, magic: i32) -> CombatantSnapshot {
    unit_snapshot(Stance::default())
        .with_levels(Channel::Melee, 0, melee)
        .with_levels(Channel::Ranged, 0, ranged)
        .with_levels(Channel::Magic, 0, magic)
}

/// A representative stance for `channel`.
pub fn stance_for(channel: Channel) -> Stance {
    match channel {
        Channel::Melee => Stance::Melee {
            attack_type: MeleeAttackType::Slash,
            attack_style: MeleeAttackStyle::Accurate,
        },
        Channel::Ranged => Stance::Ranged {
            attack_type: RangedAttackType::Standard,
            attack_style: RangedAttackStyle::Accurate,
        },
        Channel::Magic => Stance::Magic {
            attack_style: MagicAttackStyle::Accurate,
        },
    }
}

/// Wraps attributes in the combatant tag for `kind`.
pub fn tag(kind: CombatantKind, attributes: &dyn CombatAttributes) -> Combatant<'_> {
    match kind {
        CombatantKind::Player => Combatant::Player(attributes),
        CombatantKind::Npc => Combatant::Npc(attributes),
    }
}

// =============================================================================
// Style-aware attributes
// =============================================================================

/// Attributes whose offence level depends on the combat style, with unit
/// bonuses.
///
/// Accurate styles add 3 levels and controlled melee adds 1, so tests can
/// tell whether a style reached the attribute layer.
#[derive(Debug, Clone)]
pub struct StyledFighter {
    /// Base offence level on every channel
    pub base: i32,
    /// Active stance
    pub stance: Stance,
}

impl CombatAttributes for StyledFighter {
    fn melee_offence_level(&self, style: Option<MeleeAttackStyle>) -> i32 {
        self.base
            + match style {
                Some(MeleeAttackStyle::Accurate) => 3,
                Some(MeleeAttackStyle::Controlled) => 1,
                _ => 0,
            }
    }

    fn ranged_offence_level(&self, style: Option<RangedAttackStyle>) -> i32 {
        self.base + if style == Some(RangedAttackStyle::Accurate) { 3 } else { 0 }
    }

    fn magic_offence_level(&self, style: Option<MagicAttackStyle>) -> i32 {
        self.base + if style == Some(MagicAttackStyle::Accurate) { 3 } else { 0 }
    }

    fn defence_level(&self, _channel: Channel) -> i32 {
        0
    }

    fn offence_bonus(&self, _column: BonusColumn) -> i32 {
        UNIT_BONUS
    }

    fn defence_bonus(&self, _column: BonusColumn) -> i32 {
        UNIT_BONUS
    }

    fn stance(&self) -> Stance {
        self.stance
    }
}

// =============================================================================
// Requests
// =============================================================================

/// A stance-default attack for `channel`.
pub fn default_attack(channel: ChannelKind) -> Attack {
    match channel {
        ChannelKind::Melee => Attack::Melee(MeleeAttack::default()),
        ChannelKind::Ranged => Attack::Ranged(RangedAttack::default()),
        ChannelKind::Magic => Attack::Magic(MagicAttack::Spell(SpellCast::new(SpellId::new(1)))),
        ChannelKind::MultiStyle => {
            Attack::MultiStyle(MultiStyleAttack::from_stance(MultiStyle::RangedMelee))
        }
    }
}

/// Every attack variant routed to `channel`.
pub fn attacks_for(channel: ChannelKind) -> Vec<Attack> {
    match channel {
        ChannelKind::Melee => vec![Attack::Melee(MeleeAttack::default())],
        ChannelKind::Ranged => vec![Attack::Ranged(RangedAttack::default())],
        ChannelKind::Magic => vec![
            Attack::Magic(MagicAttack::Spell(SpellCast::new(SpellId::new(1)))),
            Attack::Magic(MagicAttack::Spell(
                SpellCast::new(SpellId::new(2)).with_sunfire_rune(),
            )),
            Attack::Magic(MagicAttack::Staff(StaffAttack::default())),
            Attack::Magic(MagicAttack::Innate),
        ],
        ChannelKind::MultiStyle => MultiStyle::ALL
            .into_iter()
            .map(|combo| Attack::MultiStyle(MultiStyleAttack::from_stance(combo)))
            .collect(),
    }
}

/// Channels an attack reads its attack and defence rolls from.
pub fn roll_channels(attack: &Attack) -> (Channel, Channel) {
    match attack {
        Attack::Melee(_) => (Channel::Melee, Channel::Melee),
        Attack::Ranged(_) => (Channel::Ranged, Channel::Ranged),
        Attack::Magic(_) => (Channel::Magic, Channel::Magic),
        Attack::MultiStyle(params) => match params.combo() {
            MultiStyle::MagicalMelee => (Channel::Melee, Channel::Magic),
            MultiStyle::RangedMelee => (Channel::Melee, Channel::Ranged),
            MultiStyle::RangedMagic => (Channel::Magic, Channel::Ranged),
            MultiStyle::MagicalRanged => (Channel::Ranged, Channel::Magic),
        },
    }
}

/// The key each table entry reports for the slot `key` selects.
pub fn table_key(key: ResolverKey) -> ResolverKey {
    match key.channel {
        ChannelKind::Melee => resolver::melee(key.pair).key(),
        ChannelKind::Ranged => resolver::ranged(key.pair).key(),
        ChannelKind::Magic => resolver::magic(key.pair).key(),
        ChannelKind::MultiStyle => resolver::multi_style(key.pair).key(),
    }
}

/// A request routed to the resolver named by `key`.
pub fn request_for<'a>(
    key: ResolverKey,
    attacker: &'a dyn CombatAttributes,
    defender: &'a dyn CombatAttributes,
) -> AttackRequest<'a> {
    AttackRequest::new(
        tag(key.pair.attacker(), attacker),
        tag(key.pair.defender(), defender),
        default_attack(key.channel),
    )
}

// =============================================================================
// Randomness
// =============================================================================

/// Always draws the same value.
pub struct FixedRoll(pub u32);

impl RandomSource for FixedRoll {
    fn of(&mut self, _max_exclusive: u32) -> u32 {
        self.0
    }
}
