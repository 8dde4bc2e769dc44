//! CPU load samples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instantaneous utilization as an integer percentage (0-100).
///
/// Samples are snapshots: callers must not assume successive samples are
/// monotonic or smoothed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadSample(u8);

impl LoadSample {
    pub const MAX: u8 = 100;

    /// Build a sample, clamping to 100.
    pub const fn new(percent: u8) -> Self {
        if percent > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(percent)
        }
    }

    /// Convert a raw floating-point reading, rounding and clamping to 0-100.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f32(percent: f32) -> Self {
        if percent.is_nan() {
            return Self(0);
        }
        Self(percent.round().clamp(0.0, f32::from(Self::MAX)) as u8)
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Whether this sample should hold back a fetch under the given threshold.
    pub const fn at_or_above(self, threshold: u8) -> bool {
        self.0 >= threshold
    }
}

impl fmt::Display for LoadSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
