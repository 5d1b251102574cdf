use crate::actor::{Actor, Permission};
use entities::shelters::{
    Coordinates, Resources, Shelter, ShelterId, ShelterRecord, ShelterStatus,
};
use entities::warnings::{InvalidShelterError, NotFoundWarning, ValidationWarning};
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use shared_kernel::sao_paulo_date_time::SaoPauloTZDateTime;
use std::sync::Arc;
use thiserror::Error;

/// Admin form data for an existing shelter.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterInput {
    pub id: ShelterId,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub capacity: u32,
    /// Percentage as typed. It is clamped to `[0, 100]` and floored to a whole
    /// number before the shelter is classified, so `90.5` is stored as 90 (`high`).
    pub occupancy: f64,
    pub status: ShelterStatus,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default)]
    pub distance: f64,
}

impl From<ShelterInput> for ShelterRecord {
    fn from(input: ShelterInput) -> Self {
        ShelterRecord {
            id: input.id,
            name: input.name,
            address: input.address,
            coordinates: input.coordinates,
            capacity: input.capacity,
            occupancy: Some(input.occupancy),
            occupied: None,
            status: input.status,
            resources: input.resources,
            distance: input.distance,
            last_update: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum EditShelterError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Validation(#[from] InvalidShelterError),
    #[error(transparent)]
    NotFound(#[from] NotFoundWarning),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// The whole collection after the edit.
    pub shelters: Vec<Shelter>,
    pub warnings: Vec<ValidationWarning>,
}

#[cfg_attr(test, automock)]
pub trait EditShelterRepo: Send + Sync {
    /// Replaces the shelter with the same id and returns the new collection.
    fn replace(&self, shelter: Shelter) -> Result<Vec<Shelter>, EditShelterError>;
}

pub trait EditShelterInteractor: Send + Sync {
    fn edit(&self, actor: &dyn Actor, input: ShelterInput)
        -> Result<EditOutcome, EditShelterError>;
}

pub struct EditShelterInteractorImpl {
    repo: Arc<dyn EditShelterRepo>,
}

impl EditShelterInteractorImpl {
    pub fn new(repo: Arc<dyn EditShelterRepo>) -> Self {
        Self { repo }
    }
}

impl EditShelterInteractor for EditShelterInteractorImpl {
    #[tracing::instrument(err, skip(self, actor), level = "info")]
    fn edit(
        &self,
        actor: &dyn Actor,
        input: ShelterInput,
    ) -> Result<EditOutcome, EditShelterError> {
        actor
            .check_for_permission(Permission::EditShelters)
            .map_err(|_| EditShelterError::Unauthorized)?;
        tracing::info!(editor = %actor.external_id(), id = %input.id, "editing shelter");

        let validated = ShelterRecord::from(input).into_shelter(SaoPauloTZDateTime::now())?;
        for warning in validated.warnings.iter() {
            tracing::warn!(%warning, "shelter input adjusted");
        }

        let shelters = self.repo.replace(validated.value)?;
        Ok(EditOutcome {
            shelters,
            warnings: validated.warnings,
        })
    }
}
