use crate::shelters::ShelterId;
use thiserror::Error;

/// Input was accepted after being adjusted. Never fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    #[error("occupancy {given} is outside [0, 100], clamped to {clamped}")]
    OccupancyClamped { given: f64, clamped: u8 },
    #[error("occupied count {occupied} exceeds capacity {capacity}, clamped to 100%")]
    OccupiedExceedsCapacity { occupied: u32, capacity: u32 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("shelter {id} not found")]
pub struct NotFoundWarning {
    pub id: ShelterId,
}

/// Input that cannot be turned into a shelter at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidShelterError {
    #[error("shelter name cannot be empty")]
    EmptyName,
    #[error("capacity must be a positive number")]
    ZeroCapacity,
    #[error("distance must be a finite, non-negative number, got {0}")]
    InvalidDistance(f64),
    #[error("shelter {0} has neither an occupancy percentage nor an occupied count")]
    MissingOccupancy(ShelterId),
}

/// A value that passed validation together with the adjustments made on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T> {
    pub value: T,
    pub warnings: Vec<ValidationWarning>,
}
