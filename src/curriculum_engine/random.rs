//! Injectable randomness and the shared bounded rejection sampler.
//!
//! Nothing in the engine calls a platform RNG directly. Generators receive a
//! `&mut dyn RandomSource`; production callers wrap a seeded or entropy
//! `StdRng` in [`RngSource`], tests can replay a fixed sequence with
//! [`ScriptedSource`].

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::warn;

/// Uniform integer generator.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, inclusive. Returns `min` when the
    /// range is empty or a single point.
    fn next_int(&mut self, min: i64, max: i64) -> i64;

    /// True with roughly `percent`% probability.
    fn chance(&mut self, percent: i64) -> bool {
        self.next_int(1, 100) <= percent
    }
}

/// [`RandomSource`] backed by any `rand` generator.
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        RngSource { rng: StdRng::from_entropy() }
    }

    /// Seeded when `seed` is present, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource::seeded(seed),
            None       => RngSource::from_entropy(),
        }
    }
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Replays a fixed list of values, cycling when exhausted. Each value is
/// clamped into the requested range so scripted runs stay in bounds.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<i64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<i64>) -> Self {
        ScriptedSource { values, cursor: 0 }
    }

    /// Number of values consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        if self.values.is_empty() || min >= max {
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max)
    }
}

/// Pick one element uniformly. `items` must be non-empty.
pub fn pick<T: Copy>(random: &mut dyn RandomSource, items: &[T]) -> T {
    let idx = random.next_int(0, items.len() as i64 - 1) as usize;
    items[idx.min(items.len() - 1)]
}

/// Fisher-Yates shuffle driven by the injected source.
pub fn shuffle<T>(random: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random.next_int(0, i as i64) as usize;
        items.swap(i, j);
    }
}

/// Derive a 64-bit seed from a list of integers (FNV-1a over the values).
pub fn seed_from_values(values: &[i64], salt: u64) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325 ^ salt.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    for v in values {
        for byte in v.to_le_bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
    hash
}

/// Outcome of [`rejection_sample`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sampled<T> {
    pub value: T,
    pub attempts: u32,
    /// The predicate never accepted; `value` is the last draw.
    pub degraded: bool,
}

/// Draw candidates until `accept` passes or `max_attempts` draws were made.
///
/// Fallback policy: when the cap is reached the last candidate is returned
/// with `degraded = true` rather than failing the call. At least one draw is
/// always made.
pub fn rejection_sample<T>(
    random: &mut dyn RandomSource,
    max_attempts: u32,
    mut draw: impl FnMut(&mut dyn RandomSource) -> T,
    accept: impl Fn(&T) -> bool,
) -> Sampled<T> {
    let cap = max_attempts.max(1);
    let mut candidate = draw(&mut *random);
    let mut attempts = 1;
    while !accept(&candidate) {
        if attempts >= cap {
            warn!(attempts, "rejection sampling exhausted, returning last draw");
            return Sampled { value: candidate, attempts, degraded: true };
        }
        candidate = draw(&mut *random);
        attempts += 1;
    }
    Sampled { value: candidate, attempts, degraded: false }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_source_stays_in_range() {
        let mut src = RngSource::seeded(7);
        for _ in 0..1_000 {
            let v = src.next_int(-3, 12);
            assert!((-3..=12).contains(&v));
        }
        assert_eq!(src.next_int(5, 5), 5);
        assert_eq!(src.next_int(9, 2), 9);
    }

    #[test]
    fn seeded_sources_are_deterministic() {
        let run = |seed| {
            let mut src = RngSource::seeded(seed);
            (0..10).map(|_| src.next_int(0, 1_000)).collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn scripted_source_cycles_and_clamps() {
        let mut src = ScriptedSource::new(vec![3, 50, -4]);
        assert_eq!(src.next_int(0, 10), 3);
        assert_eq!(src.next_int(0, 10), 10);
        assert_eq!(src.next_int(0, 10), 0);
        assert_eq!(src.next_int(0, 10), 3);
        assert_eq!(src.draws(), 4);
    }

    #[test]
    fn rejection_sample_accepts_first_valid_draw() {
        let mut src = ScriptedSource::new(vec![1, 3, 8, 2]);
        let out = rejection_sample(&mut src, 10, |r| r.next_int(0, 9), |v| *v > 5);
        assert_eq!(out.value, 8);
        assert_eq!(out.attempts, 3);
        assert!(!out.degraded);
    }

    #[test]
    fn rejection_sample_degrades_after_cap() {
        let mut src = ScriptedSource::new(vec![1, 2, 3]);
        let out = rejection_sample(&mut src, 5, |r| r.next_int(0, 9), |v| *v > 5);
        assert!(out.degraded);
        assert_eq!(out.attempts, 5);
        assert_eq!(out.value, 2);
    }

    #[test]
    fn zero_cap_still_draws_once() {
        let mut src = ScriptedSource::new(vec![4]);
        let out = rejection_sample(&mut src, 0, |r| r.next_int(0, 9), |_| false);
        assert_eq!(out.attempts, 1);
        assert!(out.degraded);
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut src = RngSource::seeded(3);
        let mut items: Vec<i64> = (1..=10).collect();
        shuffle(&mut src, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=10).collect::<Vec<_>>());
    }
}
