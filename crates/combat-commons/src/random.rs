//! Random source capability.
//!
//! The accuracy layer consumes exactly one uniform draw per hit roll and never
//! owns RNG state. Callers pass a [`RandomSource`] per request; [`RngSource`]
//! adapts any `rand` generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces uniform integers on demand.
pub trait RandomSource {
    /// Returns a uniform integer in `[0, max_exclusive)`.
    ///
    /// Returns `0` when `max_exclusive` is `0`.
    fn of(&mut self, max_exclusive: u32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn of(&mut self, max_exclusive: u32) -> u32 {
        (**self).of(max_exclusive)
    }
}

/// [`RandomSource`] backed by a `rand` generator.
///
/// # Example
///
/// ```
/// use combat_commons::{RandomSource, RngSource};
///
/// let mut a = RngSource::seeded(42);
/// let mut b = RngSource::seeded(42);
///
/// let roll = a.of(10_000);
/// assert!(roll < 10_000);
/// assert_eq!(roll, b.of(10_000));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    /// Deterministic source for replays and tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn of(&mut self, max_exclusive: u32) -> u32 {
        if max_exclusive == 0 {
            return 0;
        }
        self.rng.gen_range(0..max_exclusive)
    }
}
