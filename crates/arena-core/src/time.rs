//! Session time model.
//!
//! # Design
//!
//! The arena runs on wall-clock time supplied by the host's frame loop.  All
//! scheduled work (scheduler timers, the dialogue poll, delayed insight
//! extraction) is keyed by `SimTime`, an integer millisecond count since the
//! session was created.  Integer keys keep event ordering exact; the
//! fractional remainder of frame deltas is carried by `SimClock`.
//!
//! Simulation speed does **not** stretch this clock.  Speed scales the
//! *intervals* that are scheduled on it and the per-frame movement rates.

use std::fmt;

/// Milliseconds of wall-clock time since session creation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Whole minutes since session creation (for timeline bucketing).
    #[inline]
    pub fn minute(self) -> u64 {
        self.0 / 60_000
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000.0
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, ms: u64) -> SimTime {
        SimTime(self.0.saturating_add(ms))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}s", self.0 / 1_000, self.0 % 1_000)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Accumulates frame deltas into a monotonically increasing [`SimTime`].
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `dt_secs` wall-clock seconds.
    ///
    /// Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt_secs: f32) {
        if dt_secs.is_finite() && dt_secs > 0.0 {
            self.elapsed_secs += dt_secs as f64;
        }
    }

    /// The current time, truncated to whole milliseconds.
    #[inline]
    pub fn now(&self) -> SimTime {
        SimTime((self.elapsed_secs * 1_000.0) as u64)
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.now())
    }
}
