use crate::seed::{SeedData, SeedError, Seeded};
use anyhow::anyhow;
use entities::hazards::{Alert, RiskArea};
use entities::shelters::{Shelter, ShelterId};
use entities::warnings::NotFoundWarning;
use shared_kernel::sao_paulo_date_time::SaoPauloTZDateTime;
use std::sync::{Arc, RwLock};
use use_cases::shelters::collection::update_shelter;

/// The one copy of the shelter network every view reads from.
#[derive(Clone)]
pub struct InMemoryStore {
    shelters: Arc<RwLock<Vec<Shelter>>>,
    alerts: Arc<RwLock<Vec<Alert>>>,
    risk_areas: Arc<[RiskArea]>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error(transparent)]
    NotFound(#[from] NotFoundWarning),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl InMemoryStore {
    pub fn new(seed: SeedData) -> Result<Self, SeedError> {
        let seeded = seed.validate(SaoPauloTZDateTime::now())?;
        Ok(Self::from(seeded))
    }

    pub fn get(&self, id: ShelterId) -> anyhow::Result<Option<Shelter>> {
        let shelters = self
            .shelters
            .read()
            .map_err(|_| anyhow!("shelter store lock poisoned"))?;
        Ok(shelters.iter().find(|shelter| shelter.id == id).cloned())
    }

    pub fn all(&self) -> anyhow::Result<Vec<Shelter>> {
        let shelters = self
            .shelters
            .read()
            .map_err(|_| anyhow!("shelter store lock poisoned"))?;
        Ok(shelters.clone())
    }

    /// Replace-by-id under the write lock. An unknown id leaves the store as it was.
    #[tracing::instrument(skip(self, shelter), fields(id = %shelter.id), level = "info")]
    pub fn update(&self, shelter: Shelter) -> Result<Vec<Shelter>, UpdateError> {
        let mut shelters = self
            .shelters
            .write()
            .map_err(|_| anyhow!("shelter store lock poisoned"))?;
        *shelters = update_shelter(&shelters, shelter).map_err(|warning| {
            tracing::warn!(%warning, "update ignored");
            warning
        })?;
        Ok(shelters.clone())
    }

    pub fn alerts(&self) -> anyhow::Result<Vec<Alert>> {
        let alerts = self
            .alerts
            .read()
            .map_err(|_| anyhow!("alert store lock poisoned"))?;
        Ok(alerts.clone())
    }

    pub fn risk_areas(&self) -> Vec<RiskArea> {
        self.risk_areas.to_vec()
    }
}

impl From<Seeded> for InMemoryStore {
    fn from(seeded: Seeded) -> Self {
        tracing::info!(
            shelters = seeded.shelters.len(),
            alerts = seeded.alerts.len(),
            risk_areas = seeded.risk_areas.len(),
            "store seeded"
        );
        Self {
            shelters: Arc::new(RwLock::new(seeded.shelters)),
            alerts: Arc::new(RwLock::new(seeded.alerts)),
            risk_areas: seeded.risk_areas.into(),
        }
    }
}
