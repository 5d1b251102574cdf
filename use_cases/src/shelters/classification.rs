use entities::display::ColorToken;
use entities::shelters::{OccupancyPercent, Shelter, ShelterStatus};
use entities::warnings::ValidationWarning;
use serde::{Deserialize, Serialize};

/// Inclusive upper bounds of the display bands, checked in ascending order.
pub const AVAILABLE_BAND_MAX: f64 = 50.0;
pub const MEDIUM_BAND_MAX: f64 = 75.0;
pub const HIGH_BAND_MAX: f64 = 90.0;

/// Strict upper bound used by the "only available" list filter. It has the same
/// value as `HIGH_BAND_MAX` but is a separate rule: a shelter at exactly 90 %
/// is drawn as `high` yet filtered out as unavailable.
pub const FILTER_AVAILABLE_BELOW: u8 = 90;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyBand {
    Available,
    Medium,
    High,
    Full,
}

impl OccupancyBand {
    pub fn color(&self) -> ColorToken {
        match self {
            OccupancyBand::Available => ColorToken::Green,
            OccupancyBand::Medium => ColorToken::Yellow,
            OccupancyBand::High => ColorToken::Orange,
            OccupancyBand::Full => ColorToken::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OccupancyBand::Available => "Available",
            OccupancyBand::Medium => "Medium occupancy",
            OccupancyBand::High => "High occupancy",
            OccupancyBand::Full => "Full",
        }
    }
}

/// Like [`classify_occupancy_checked`], logging the warning instead of returning it.
pub fn classify_occupancy(percent: f64) -> OccupancyBand {
    let (band, warning) = classify_occupancy_checked(percent);
    if let Some(warning) = warning {
        tracing::warn!(%warning, "classified an out of range occupancy");
    }
    band
}

/// Out of range input (including NaN, read as 0) is clamped to `[0, 100]`
/// before classification and reported.
pub fn classify_occupancy_checked(percent: f64) -> (OccupancyBand, Option<ValidationWarning>) {
    let clamped = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, f64::from(OccupancyPercent::MAX))
    };
    let warning = (clamped != percent).then(|| ValidationWarning::OccupancyClamped {
        given: percent,
        clamped: clamped as u8,
    });
    (band_of(clamped), warning)
}

fn band_of(percent: f64) -> OccupancyBand {
    if percent <= AVAILABLE_BAND_MAX {
        OccupancyBand::Available
    } else if percent <= MEDIUM_BAND_MAX {
        OccupancyBand::Medium
    } else if percent <= HIGH_BAND_MAX {
        OccupancyBand::High
    } else {
        OccupancyBand::Full
    }
}

pub fn shelter_band(shelter: &Shelter) -> OccupancyBand {
    band_of(shelter.occupancy.as_f64())
}

pub fn is_available(shelter: &Shelter) -> bool {
    shelter.status == ShelterStatus::Open && shelter.occupancy.value() < FILTER_AVAILABLE_BELOW
}
