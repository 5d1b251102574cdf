use crate::shelters::Capacity;
use crate::warnings::ValidationWarning;
use serde::{Deserialize, Serialize};

/// Whole-number occupancy percentage, always within `[0, 100]`.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct OccupancyPercent(u8);

impl OccupancyPercent {
    pub const MAX: u8 = 100;

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Accepts any reported percentage. Fractions are floored; values outside
    /// `[0, 100]` (and NaN, which becomes 0) are clamped and reported.
    pub fn clamped(given: f64) -> (Self, Option<ValidationWarning>) {
        let clamped = if given.is_nan() {
            0.0
        } else {
            given.clamp(0.0, f64::from(Self::MAX))
        };
        let percent = OccupancyPercent(clamped.floor() as u8);
        if clamped == given {
            return (percent, None);
        }
        let warning = ValidationWarning::OccupancyClamped {
            given,
            clamped: percent.0,
        };
        (percent, Some(warning))
    }

    /// `floor(occupied / capacity * 100)`, computed in integers so that no
    /// float rounding can push a value across a band boundary.
    pub fn from_count(occupied: u32, capacity: Capacity) -> (Self, Option<ValidationWarning>) {
        let capacity = capacity.value();
        if occupied > capacity {
            let warning = ValidationWarning::OccupiedExceedsCapacity { occupied, capacity };
            return (OccupancyPercent(Self::MAX), Some(warning));
        }
        let percent = u64::from(occupied) * 100 / u64::from(capacity);
        (OccupancyPercent(percent as u8), None)
    }

    /// Number of people this percentage represents, `floor(percent / 100 * capacity)`.
    pub fn occupied_of(&self, capacity: Capacity) -> u32 {
        (u64::from(self.0) * u64::from(capacity.value()) / 100) as u32
    }
}

impl TryFrom<u8> for OccupancyPercent {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(format!("occupancy {value} is above {}", Self::MAX));
        }
        Ok(OccupancyPercent(value))
    }
}

impl From<OccupancyPercent> for u8 {
    fn from(value: OccupancyPercent) -> Self {
        value.0
    }
}
