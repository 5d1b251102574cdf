use crate::shelters::classification::{shelter_band, OccupancyBand};
use crate::shelters::collection::{filter_shelters, sort_shelters, SortKey};
use entities::display::ColorToken;
use entities::shelters::{ResourceKind, Shelter, SupplyLevel};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use shared_kernel::sao_paulo_date_time::SaoPauloTZDateTime;
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ShelterListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub only_available: bool,
    #[serde(default)]
    pub sort_by: Option<SortKey>,
}

/// One resource icon, with flags already turned into a supply level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Supply {
    pub kind: ResourceKind,
    pub level: SupplyLevel,
}

/// A shelter as drawn in the list and on the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterCard {
    #[serde(flatten)]
    pub shelter: Shelter,
    pub band: OccupancyBand,
    pub color: ColorToken,
    pub color_hex: &'static str,
    pub label: &'static str,
    pub occupied: u32,
    pub remaining: u32,
    pub can_route: bool,
    pub supplies: Vec<Supply>,
    pub last_update_display: String,
}

impl ShelterCard {
    pub fn new(shelter: Shelter, now: &SaoPauloTZDateTime) -> Self {
        let band = shelter_band(&shelter);
        let supplies = shelter
            .resources
            .iter()
            .map(|(kind, availability)| Supply {
                kind,
                level: availability.level(),
            })
            .collect();
        ShelterCard {
            band,
            color: band.color(),
            color_hex: band.color().hex(),
            label: band.label(),
            occupied: shelter.occupied(),
            remaining: shelter.remaining(),
            can_route: shelter.occupancy.value() < 100,
            supplies,
            last_update_display: shelter.last_update.describe(now),
            shelter,
        }
    }
}

#[cfg_attr(test, automock)]
pub trait ShelterListRepo: Send + Sync {
    fn all(&self) -> anyhow::Result<Vec<Shelter>>;
}

pub trait ShelterListInteractor: Send + Sync {
    fn list(&self, query: ShelterListQuery) -> anyhow::Result<Vec<ShelterCard>>;
}

pub struct ShelterListInteractorImpl {
    repo: Arc<dyn ShelterListRepo>,
}

impl ShelterListInteractorImpl {
    pub fn new(repo: Arc<dyn ShelterListRepo>) -> Self {
        Self { repo }
    }
}

impl ShelterListInteractor for ShelterListInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    fn list(&self, query: ShelterListQuery) -> anyhow::Result<Vec<ShelterCard>> {
        let shelters = self.repo.all()?;
        let mut shelters = filter_shelters(&shelters, &query.search, query.only_available);
        if let Some(key) = query.sort_by {
            shelters = sort_shelters(&shelters, key);
        }
        let now = SaoPauloTZDateTime::now();
        Ok(shelters
            .into_iter()
            .map(|shelter| ShelterCard::new(shelter, &now))
            .collect())
    }
}
