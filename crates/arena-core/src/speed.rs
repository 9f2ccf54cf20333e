//! The discrete simulation-speed multiplier.

use std::fmt;

use crate::ArenaError;

/// How fast the simulated review runs relative to wall-clock time.
///
/// Applied to movement and gaze rates, dwell accrual, scheduler intervals,
/// dialogue cooldowns and the insight-extraction delay.  The dialogue poll
/// period is the one interval that ignores it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimSpeed {
    Half,
    #[default]
    Normal,
    Double,
    Quadruple,
}

impl SimSpeed {
    pub const ALL: [SimSpeed; 4] = [
        SimSpeed::Half,
        SimSpeed::Normal,
        SimSpeed::Double,
        SimSpeed::Quadruple,
    ];

    /// The numeric multiplier.
    #[inline]
    pub fn factor(self) -> f32 {
        match self {
            SimSpeed::Half      => 0.5,
            SimSpeed::Normal    => 1.0,
            SimSpeed::Double    => 2.0,
            SimSpeed::Quadruple => 4.0,
        }
    }

    /// Convert a nominal wall-clock interval into the interval to schedule at
    /// this speed (`ms / factor`, rounded to whole milliseconds).
    #[inline]
    pub fn scale_ms(self, ms: f64) -> u64 {
        (ms / self.factor() as f64).round().max(0.0) as u64
    }
}

impl TryFrom<f32> for SimSpeed {
    type Error = ArenaError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        SimSpeed::ALL
            .into_iter()
            .find(|s| (s.factor() - value).abs() < f32::EPSILON)
            .ok_or(ArenaError::UnsupportedSpeed(value))
    }
}

impl fmt::Display for SimSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}
