//! Property tests for the reduction and the dispatcher.

use combat_commons::{BonusColumn, BonusTable, Channel, CombatantSnapshot, RngSource, Stance};
use proptest::prelude::*;

use crate::formulae::AccuracyFormulae;
use crate::hit_chance::{HitChance, Rolls, HIT_CHANCE_SCALE};
use crate::hit_roll::is_successful_hit;
use crate::request::{AttackRequest, ChannelKind, PairKind, ResolverKey};

use super::helpers::{attacks_for, flat_bonuses, request_for, roll_channels, stance_for, tag};

fn bonuses() -> impl Strategy<Value = BonusTable> {
    prop::array::uniform8(-200i32..=300).prop_map(|v| BonusTable {
        stab: v[0],
        slash: v[1],
        crush: v[2],
        ranged: v[3],
        ranged_light: v[4],
        ranged_standard: v[5],
        ranged_heavy: v[6],
        magic: v[7],
    })
}

fn snapshot() -> impl Strategy<Value = CombatantSnapshot> {
    (
        prop::array::uniform3(0i32..=500),
        prop::array::uniform3(0i32..=500),
        bonuses(),
        bonuses(),
        prop::sample::select(vec![Channel::Melee, Channel::Ranged, Channel::Magic]),
    )
        .prop_map(|(offence, defence, offence_bonuses, defence_bonuses, stance_channel)| {
            let mut snapshot = CombatantSnapshot {
                offence_bonuses,
                defence_bonuses,
                ..CombatantSnapshot::new(stance_for(stance_channel))
            };
            for (i, channel) in Channel::ALL.into_iter().enumerate() {
                snapshot = snapshot.with_levels(channel, offence[i], defence[i]);
            }
            snapshot
        })
}

proptest! {
    #[test]
    fn reduction_stays_in_range(attack in any::<i64>(), defence in any::<i64>()) {
        let chance = HitChance::from_rolls(attack, defence);
        prop_assert!(chance.get() <= HIT_CHANCE_SCALE);
    }

    #[test]
    fn reduction_is_monotone_in_attack(
        attack in 0i64..2_000_000,
        extra in 0i64..2_000_000,
        defence in 0i64..2_000_000,
    ) {
        let lower = HitChance::from_rolls(attack, defence);
        let higher = HitChance::from_rolls(attack + extra, defence);
        prop_assert!(lower <= higher);
    }

    #[test]
    fn reduction_is_antitone_in_defence(
        attack in 0i64..2_000_000,
        defence in 0i64..2_000_000,
        extra in 0i64..2_000_000,
    ) {
        let easier = HitChance::from_rolls(attack, defence);
        let harder = HitChance::from_rolls(attack, defence + extra);
        prop_assert!(harder <= easier);
    }

    #[test]
    fn negative_attack_rolls_never_hit(attack in i64::MIN..0, defence in 0i64..1_000_000) {
        prop_assert_eq!(HitChance::from_rolls(attack, defence), HitChance::ZERO);
    }

    #[test]
    fn negative_defence_rolls_never_hurt_the_attacker(
        attack in 0i64..1_000_000,
        defence in -1_000_000i64..0,
    ) {
        prop_assert!(HitChance::from_rolls(attack, defence) >= HitChance::from_rolls(attack, 0));
    }

    #[test]
    fn every_attack_variant_reduces_its_rolls(
        attacker in snapshot(),
        defender in snapshot(),
        index in 0usize..16,
    ) {
        let key = ResolverKey::ALL[index];
        let formulae = AccuracyFormulae::default();
        for attack in attacks_for(key.channel) {
            let request = AttackRequest::new(
                tag(key.pair.attacker(), &attacker),
                tag(key.pair.defender(), &defender),
                attack,
            );
            let rolls = formulae.rolls(&request);
            prop_assert_eq!(formulae.hit_chance(&request), rolls.hit_chance());
        }
    }

    #[test]
    fn flat_bonus_rolls_are_level_times_offset_bonus(
        offence in prop::array::uniform3(0i32..=500),
        defence in prop::array::uniform3(0i32..=500),
        offence_bonus in -200i32..=300,
        defence_bonus in -200i32..=300,
        index in 0usize..16,
    ) {
        let mut attacker = CombatantSnapshot {
            offence_bonuses: flat_bonuses(offence_bonus),
            defence_bonuses: flat_bonuses(offence_bonus),
            ..CombatantSnapshot::new(stance_for(Channel::Melee))
        };
        let mut defender = CombatantSnapshot {
            offence_bonuses: flat_bonuses(defence_bonus),
            defence_bonuses: flat_bonuses(defence_bonus),
            ..CombatantSnapshot::default()
        };
        for (i, channel) in Channel::ALL.into_iter().enumerate() {
            attacker = attacker.with_levels(channel, offence[i], 0);
            defender = defender.with_levels(channel, 0, defence[i]);
        }
        let level = |levels: &[i32; 3], channel: Channel| {
            let i = Channel::ALL.iter().position(|c| *c == channel).unwrap_or(0);
            i64::from(levels[i])
        };

        let key = ResolverKey::ALL[index];
        let formulae = AccuracyFormulae::default();
        for attack in attacks_for(key.channel) {
            let request = AttackRequest::new(
                tag(key.pair.attacker(), &attacker),
                tag(key.pair.defender(), &defender),
                attack,
            );
            let (offence_channel, defence_channel) = roll_channels(&attack);
            let attack_roll = level(&offence, offence_channel) * (i64::from(offence_bonus) + 64);
            let defence_roll = level(&defence, defence_channel) * (i64::from(defence_bonus) + 64);
            prop_assert_eq!(
                formulae.rolls(&request),
                Rolls::new(attack_roll, defence_roll)
            );
        }
    }

    #[test]
    fn extremes_are_decided_for_any_seed(seed in any::<u64>()) {
        let mut random = RngSource::seeded(seed);
        prop_assert!(!is_successful_hit(HitChance::ZERO, &mut random));
        prop_assert!(is_successful_hit(HitChance::CERTAIN, &mut random));
    }

    #[test]
    fn raising_defence_bonus_never_helps(
        level in 1i32..=300,
        bonus in -64i32..=300,
        extra in 0i32..=200,
    ) {
        let attacker = CombatantSnapshot::new(Stance::default())
            .with_levels(Channel::Melee, 120, 0)
            .with_offence_bonus(BonusColumn::Crush, 80);
        let weak = CombatantSnapshot::default()
            .with_levels(Channel::Melee, 0, level)
            .with_defence_bonus(BonusColumn::Crush, bonus);
        let strong = weak.clone().with_defence_bonus(BonusColumn::Crush, bonus + extra);
        let formulae = AccuracyFormulae::default();
        let key = ResolverKey::new(PairKind::PlayerVsNpc, ChannelKind::Melee);
        let against_weak = formulae.hit_chance(&request_for(key, &attacker, &weak));
        let against_strong = formulae.hit_chance(&request_for(key, &attacker, &strong));
        prop_assert!(against_strong <= against_weak);
    }
}
