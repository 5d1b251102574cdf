use crate::store::{InMemoryStore, UpdateError};
use entities::hazards::{Alert, RiskArea};
use entities::shelters::{Shelter, ShelterId};
use use_cases::alerts::AlertsRepo;
use use_cases::shelters::edit_shelter::{EditShelterError, EditShelterRepo};
use use_cases::shelters::list_shelters::ShelterListRepo;
use use_cases::shelters::selection::FindShelterRepo;

impl ShelterListRepo for InMemoryStore {
    fn all(&self) -> anyhow::Result<Vec<Shelter>> {
        InMemoryStore::all(self)
    }
}

impl FindShelterRepo for InMemoryStore {
    fn get(&self, id: ShelterId) -> anyhow::Result<Option<Shelter>> {
        InMemoryStore::get(self, id)
    }
}

impl EditShelterRepo for InMemoryStore {
    fn replace(&self, shelter: Shelter) -> Result<Vec<Shelter>, EditShelterError> {
        self.update(shelter).map_err(|err| match err {
            UpdateError::NotFound(warning) => EditShelterError::NotFound(warning),
            UpdateError::Internal(err) => EditShelterError::Internal(err),
        })
    }
}

impl AlertsRepo for InMemoryStore {
    fn alerts(&self) -> anyhow::Result<Vec<Alert>> {
        InMemoryStore::alerts(self)
    }

    fn risk_areas(&self) -> anyhow::Result<Vec<RiskArea>> {
        Ok(InMemoryStore::risk_areas(self))
    }
}
