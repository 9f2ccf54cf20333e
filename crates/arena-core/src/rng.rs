//! Injectable randomness.
//!
//! Target selection and dialogue both make random choices.  They draw through
//! the [`RandomSource`] trait so a session can run on:
//!
//! - [`SimRng`]: a `SmallRng`, seeded for reproducible runs or from OS
//!   entropy for the usual "different every run" behavior;
//! - [`ScriptedRng`]: a fixed, cycling list of unit samples, so tests can
//!   force an exact sequence of choices.
//!
//! All helpers are derived from a single primitive, [`RandomSource::next_unit`],
//! which keeps scripted sequences easy to reason about: every helper call
//! consumes exactly one sample.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[lo, hi)`.
    #[inline]
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_unit()
    }

    /// `true` with probability `p` (clamped to `[0, 1]`).
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p.clamp(0.0, 1.0)
    }

    /// Uniform index into a collection of `len` elements, `None` when empty.
    #[inline]
    fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let i = (self.next_unit() * len as f64) as usize;
        Some(i.min(len - 1))
    }

    /// Choose a random element from a slice.  Returns `None` if it is empty.
    #[inline]
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        self.index(slice.len()).map(|i| &slice[i])
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Session-level RNG backed by `SmallRng`.
///
/// The arena is single-threaded, so one generator serves the scheduler and
/// the dialogue generator alike.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic generator for reproducible runs.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy: choices differ from run to run.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// `new(seed)` when a seed is configured, `from_entropy()` otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        seed.map_or_else(SimRng::from_entropy, SimRng::new)
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── ScriptedRng ───────────────────────────────────────────────────────────────

/// Replays a fixed list of unit samples, wrapping around at the end.
///
/// Values are clamped into `[0, 1)`.  An empty script always yields `0.0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    samples: Vec<f64>,
    cursor:  usize,
}

impl ScriptedRng {
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self { samples: samples.into(), cursor: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let v = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
