//! Hit-roll primitive.

use combat_commons::RandomSource;
use tracing::trace;

use crate::hit_chance::{HitChance, HIT_CHANCE_SCALE};

/// Decides whether an attack with `hit_chance` lands.
///
/// Draws one value in `[0, 10000)` from `random` and hits when the chance is
/// strictly greater than the draw. A chance of `0` never hits and a chance of
/// `10000` always hits.
///
/// # Example
///
/// ```
/// use combat_commons::RngSource;
/// use combat_formulas::{is_successful_hit, HitChance};
///
/// let mut random = RngSource::seeded(1);
/// assert!(!is_successful_hit(HitChance::ZERO, &mut random));
/// assert!(is_successful_hit(HitChance::CERTAIN, &mut random));
/// ```
pub fn is_successful_hit<R>(hit_chance: HitChance, random: &mut R) -> bool
where
    R: RandomSource + ?Sized,
{
    let roll = random.of(HIT_CHANCE_SCALE);
    let hit = hit_chance.get() > roll;
    trace!(hit_chance = hit_chance.get(), roll, hit, "hit roll");
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::helpers::FixedRoll;
    use combat_commons::RngSource;

    #[test]
    fn boundary_is_strict() {
        let chance = HitChance::new(7426);
        assert!(is_successful_hit(chance, &mut FixedRoll(7425)));
        assert!(!is_successful_hit(chance, &mut FixedRoll(7426)));
    }

    #[test]
    fn zero_chance_never_hits() {
        assert!(!is_successful_hit(HitChance::ZERO, &mut FixedRoll(0)));
        let mut random = RngSource::seeded(11);
        assert!((0..1_000).all(|_| !is_successful_hit(HitChance::ZERO, &mut random)));
    }

    #[test]
    fn certain_chance_always_hits() {
        assert!(is_successful_hit(HitChance::CERTAIN, &mut FixedRoll(9_999)));
        let mut random = RngSource::seeded(12);
        assert!((0..1_000).all(|_| is_successful_hit(HitChance::CERTAIN, &mut random)));
    }

    #[test]
    fn even_chance_hits_about_half() {
        let mut random = RngSource::seeded(2024);
        let hits = (0..20_000)
            .filter(|_| is_successful_hit(HitChance::new(5_000), &mut random))
            .count();
        assert!((9_000..=11_000).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn draws_exactly_once() {
        struct Counting(u32);
        impl RandomSource for Counting {
            fn of(&mut self, max_exclusive: u32) -> u32 {
                assert_eq!(max_exclusive, HIT_CHANCE_SCALE);
                self.0 += 1;
                0
            }
        }

        let mut counting = Counting(0);
        is_successful_hit(HitChance::new(100), &mut counting);
        assert_eq!(counting.0, 1);
    }

    #[test]
    fn accepts_trait_objects() {
        let mut fixed = FixedRoll(10);
        let random: &mut dyn RandomSource = &mut fixed;
        assert!(is_successful_hit(HitChance::new(11), random));
    }
}
