mod occupancy;
mod resources;

pub use occupancy::OccupancyPercent;
pub use resources::{ResourceAvailability, ResourceKind, Resources, SupplyLevel};

use crate::warnings::{InvalidShelterError, Validated};
use serde::{Deserialize, Serialize};
use shared_kernel::sao_paulo_date_time::SaoPauloTZDateTime;
use shared_kernel::{integer_key, non_empty_string};
use std::num::NonZeroU32;

integer_key!(ShelterId);

non_empty_string!(ShelterName);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capacity(NonZeroU32);

impl Capacity {
    pub fn value(&self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Capacity {
    type Error = InvalidShelterError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(value)
            .map(Capacity)
            .ok_or(InvalidShelterError::ZeroCapacity)
    }
}

impl From<Capacity> for u32 {
    fn from(value: Capacity) -> Self {
        value.value()
    }
}

/// Kilometres from the reference point.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Distance(f64);

impl Distance {
    pub fn km(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Distance {
    type Error = InvalidShelterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidShelterError::InvalidDistance(value));
        }
        Ok(Distance(value))
    }
}

impl From<Distance> for f64 {
    fn from(value: Distance) -> Self {
        value.0
    }
}

/// Operator-set availability. This, not the occupancy band, decides whether
/// a shelter takes people in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShelterStatus {
    Open,
    Full,
    Closed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LastUpdate {
    Timestamp(SaoPauloTZDateTime),
    Display(String),
}

impl LastUpdate {
    /// `"<n> min"` for timestamps within the last hour, the local clock time
    /// (`"15:30"`) for older ones, the stored text otherwise.
    pub fn describe(&self, now: &SaoPauloTZDateTime) -> String {
        match self {
            LastUpdate::Timestamp(at) => {
                let minutes = at.elapsed_since(now).num_minutes();
                if minutes < 60 {
                    format!("{minutes} min")
                } else {
                    at.to_date_time().format("%H:%M").to_string()
                }
            }
            LastUpdate::Display(text) => text.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelter {
    pub id: ShelterId,
    pub name: ShelterName,
    pub address: String,
    pub coordinates: Coordinates,
    pub capacity: Capacity,
    pub occupancy: OccupancyPercent,
    pub status: ShelterStatus,
    #[serde(default)]
    pub resources: Resources,
    pub distance: Distance,
    pub last_update: LastUpdate,
}

impl Shelter {
    pub fn occupied(&self) -> u32 {
        self.occupancy.occupied_of(self.capacity)
    }

    pub fn remaining(&self) -> u32 {
        self.capacity.value() - self.occupied()
    }
}

/// A shelter as it arrives from seed files or the admin form. Occupancy can be
/// given as a percentage (`occupancy`) or as a head count (`occupied`); the
/// percentage wins when both are present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterRecord {
    pub id: ShelterId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub coordinates: Coordinates,
    pub capacity: u32,
    #[serde(default)]
    pub occupancy: Option<f64>,
    #[serde(default)]
    pub occupied: Option<u32>,
    pub status: ShelterStatus,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub last_update: Option<LastUpdate>,
}

impl ShelterRecord {
    /// Validates the record. A missing `lastUpdate` is stamped with `now`.
    pub fn into_shelter(
        self,
        now: SaoPauloTZDateTime,
    ) -> Result<Validated<Shelter>, InvalidShelterError> {
        let name = ShelterName::try_from(self.name).map_err(|_| InvalidShelterError::EmptyName)?;
        let capacity = Capacity::try_from(self.capacity)?;
        let distance = Distance::try_from(self.distance)?;
        let (occupancy, warning) = match (self.occupancy, self.occupied) {
            (Some(percent), _) => OccupancyPercent::clamped(percent),
            (None, Some(occupied)) => OccupancyPercent::from_count(occupied, capacity),
            (None, None) => return Err(InvalidShelterError::MissingOccupancy(self.id)),
        };
        let shelter = Shelter {
            id: self.id,
            name,
            address: self.address,
            coordinates: self.coordinates,
            capacity,
            occupancy,
            status: self.status,
            resources: self.resources,
            distance,
            last_update: self.last_update.unwrap_or(LastUpdate::Timestamp(now)),
        };
        Ok(Validated {
            value: shelter,
            warnings: warning.into_iter().collect(),
        })
    }
}
