use anyhow::Context;
use entities::hazards::{Alert, AlertId, RiskArea};
use entities::shelters::{Shelter, ShelterId, ShelterRecord};
use entities::warnings::InvalidShelterError;
use itertools::Itertools;
use serde::Deserialize;
use shared_kernel::sao_paulo_date_time::SaoPauloTZDateTime;
use std::path::Path;
use thiserror::Error;

const BUILT_IN_SEED: &str = include_str!("../seed.yaml");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed document is not valid: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("shelter id {0} appears more than once")]
    DuplicateShelterId(ShelterId),
    #[error("alert id {0} appears more than once")]
    DuplicateAlertId(AlertId),
    #[error("shelter {id} is invalid: {source}")]
    InvalidShelter {
        id: ShelterId,
        source: InvalidShelterError,
    },
}

/// Initial content of the store, in the shape of the seed document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub shelters: Vec<ShelterRecord>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub risk_areas: Vec<RiskArea>,
}

/// Validated seed content, ready to be owned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct Seeded {
    pub shelters: Vec<Shelter>,
    pub alerts: Vec<Alert>,
    pub risk_areas: Vec<RiskArea>,
}

impl SeedData {
    pub fn built_in() -> Result<Self, SeedError> {
        Self::from_yaml_str(BUILT_IN_SEED)
    }

    pub fn from_yaml_str(document: &str) -> Result<Self, SeedError> {
        Ok(serde_yaml::from_str(document)?)
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let document = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_yaml_str(&document)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))
    }

    /// The seed file at `path`, or the built-in seed when none is configured.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::built_in().context("Failed to parse the built-in seed"),
        }
    }

    /// Rejects repeated ids and invalid records. Adjusted records are kept and
    /// their warnings logged.
    pub fn validate(self, now: SaoPauloTZDateTime) -> Result<Seeded, SeedError> {
        if let Some(id) = self.shelters.iter().map(|record| record.id).duplicates().next() {
            return Err(SeedError::DuplicateShelterId(id));
        }
        if let Some(id) = self.alerts.iter().map(|alert| alert.id).duplicates().next() {
            return Err(SeedError::DuplicateAlertId(id));
        }

        let shelters = self
            .shelters
            .into_iter()
            .map(|record| {
                let id = record.id;
                let validated = record
                    .into_shelter(now)
                    .map_err(|source| SeedError::InvalidShelter { id, source })?;
                for warning in validated.warnings.iter() {
                    tracing::warn!(%id, %warning, "seed record adjusted");
                }
                Ok(validated.value)
            })
            .collect::<Result<Vec<_>, SeedError>>()?;

        Ok(Seeded {
            shelters,
            alerts: self.alerts,
            risk_areas: self.risk_areas,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SeedData, SeedError};
    use entities::hazards::Severity;
    use entities::shelters::{ResourceAvailability, ShelterId, ShelterStatus, SupplyLevel};
    use rstest::rstest;
    use shared_kernel::sao_paulo_date_time::SaoPauloTZDateTime;
    use std::io::Write;

    const DUPLICATED: &str = r#"
shelters:
  - id: 7
    name: Abrigo A
    coordinates: { lat: 0.0, lng: 0.0 }
    capacity: 10
    occupancy: 10
    status: open
  - id: 7
    name: Abrigo B
    coordinates: { lat: 0.0, lng: 0.0 }
    capacity: 10
    occupancy: 20
    status: open
"#;

    #[test]
    fn test_built_in_seed_is_valid() {
        let seeded = SeedData::built_in()
            .unwrap()
            .validate(SaoPauloTZDateTime::now())
            .unwrap();

        assert_eq!(seeded.shelters.len(), 5);
        assert_eq!(seeded.alerts.len(), 3);
        assert_eq!(seeded.risk_areas.len(), 3);
        assert_eq!(seeded.alerts[0].severity, Severity::High);
    }

    #[rstest]
    #[case(1, 45, ShelterStatus::Open)]
    #[case(2, 78, ShelterStatus::Open)]
    #[case(3, 92, ShelterStatus::Full)]
    #[case(4, 31, ShelterStatus::Open)]
    #[case(5, 60, ShelterStatus::Open)]
    fn test_built_in_shelters(
        #[case] id: u32,
        #[case] occupancy: u8,
        #[case] status: ShelterStatus,
    ) {
        let seeded = SeedData::built_in()
            .unwrap()
            .validate(SaoPauloTZDateTime::now())
            .unwrap();
        let shelter = seeded
            .shelters
            .iter()
            .find(|shelter| shelter.id == ShelterId::new(id))
            .unwrap();

        assert_eq!(shelter.occupancy.value(), occupancy);
        assert_eq!(shelter.status, status);
    }

    #[test]
    fn test_built_in_seed_keeps_display_fields() {
        let seeded = SeedData::built_in()
            .unwrap()
            .validate(SaoPauloTZDateTime::now())
            .unwrap();
        let central = &seeded.shelters[0];

        assert_eq!(central.name.as_ref(), "Abrigo Central Vila Esperança");
        assert_eq!(central.resources.food, Some(ResourceAvailability::Level(SupplyLevel::Medium)));
        assert_eq!(central.last_update.describe(&SaoPauloTZDateTime::now()), "5 min");
        assert_eq!(seeded.alerts[1].time, "14:45");
    }

    #[test]
    fn test_repeated_ids_are_rejected() {
        let result = SeedData::from_yaml_str(DUPLICATED)
            .unwrap()
            .validate(SaoPauloTZDateTime::now());

        assert!(matches!(
            result,
            Err(SeedError::DuplicateShelterId(id)) if id == ShelterId::new(7)
        ));
    }

    #[test]
    fn test_invalid_record_is_reported_with_its_id() {
        let document = DUPLICATED.replace("id: 7\n    name: Abrigo B", "id: 8\n    name: \"\"");
        let result = SeedData::from_yaml_str(&document)
            .unwrap()
            .validate(SaoPauloTZDateTime::now());

        assert!(matches!(
            result,
            Err(SeedError::InvalidShelter { id, .. }) if id == ShelterId::new(8)
        ));
    }

    #[test]
    fn test_seed_file_is_read_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let document = DUPLICATED.replace("id: 7\n    name: Abrigo B", "id: 8\n    name: Abrigo B");
        file.write_all(document.as_bytes()).unwrap();

        let seed = SeedData::load(Some(file.path())).unwrap();

        assert_eq!(seed.shelters.len(), 2);
        assert!(seed.alerts.is_empty());
    }

    #[test]
    fn test_missing_seed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SeedData::load(Some(&dir.path().join("missing.yaml"))).is_err());
    }
}
