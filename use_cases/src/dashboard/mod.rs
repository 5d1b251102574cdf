use crate::alerts::{highest_severity, AlertsRepo};
use crate::shelters::classification::{shelter_band, OccupancyBand};
use crate::shelters::list_shelters::ShelterListRepo;
use entities::hazards::{Alert, Severity};
use entities::shelters::{Shelter, ShelterStatus};
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts {
    pub available: usize,
    pub medium: usize,
    pub high: usize,
    pub full: usize,
}

impl BandCounts {
    fn add(&mut self, band: OccupancyBand) {
        match band {
            OccupancyBand::Available => self.available += 1,
            OccupancyBand::Medium => self.medium += 1,
            OccupancyBand::High => self.high += 1,
            OccupancyBand::Full => self.full += 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    pub full: usize,
    pub closed: usize,
}

impl StatusCounts {
    fn add(&mut self, status: ShelterStatus) {
        match status {
            ShelterStatus::Open => self.open += 1,
            ShelterStatus::Full => self.full += 1,
            ShelterStatus::Closed => self.closed += 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_shelters: usize,
    pub open_shelters: usize,
    pub people_sheltered: u64,
    pub total_capacity: u64,
    pub remaining_places: u64,
    /// Floor of people sheltered over total capacity, 0 for an empty network.
    pub overall_occupancy: u8,
    pub by_band: BandCounts,
    pub by_status: StatusCounts,
    pub active_alerts: usize,
    pub highest_severity: Option<Severity>,
}

pub fn compute_stats(shelters: &[Shelter], alerts: &[Alert]) -> DashboardStats {
    let mut by_band = BandCounts::default();
    let mut by_status = StatusCounts::default();
    let mut people_sheltered = 0u64;
    let mut total_capacity = 0u64;

    for shelter in shelters {
        by_band.add(shelter_band(shelter));
        by_status.add(shelter.status);
        people_sheltered += u64::from(shelter.occupied());
        total_capacity += u64::from(shelter.capacity.value());
    }

    let overall_occupancy = match total_capacity {
        0 => 0,
        capacity => (people_sheltered * 100 / capacity) as u8,
    };

    DashboardStats {
        total_shelters: shelters.len(),
        open_shelters: by_status.open,
        people_sheltered,
        total_capacity,
        remaining_places: total_capacity - people_sheltered,
        overall_occupancy,
        by_band,
        by_status,
        active_alerts: alerts.len(),
        highest_severity: highest_severity(alerts),
    }
}

pub trait DashboardInteractor: Send + Sync {
    fn stats(&self) -> anyhow::Result<DashboardStats>;
}

pub struct DashboardInteractorImpl {
    shelters: Arc<dyn ShelterListRepo>,
    alerts: Arc<dyn AlertsRepo>,
}

impl DashboardInteractorImpl {
    pub fn new(shelters: Arc<dyn ShelterListRepo>, alerts: Arc<dyn AlertsRepo>) -> Self {
        Self { shelters, alerts }
    }
}

impl DashboardInteractor for DashboardInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    fn stats(&self) -> anyhow::Result<DashboardStats> {
        let shelters = self.shelters.all()?;
        let alerts = self.alerts.alerts()?;
        Ok(compute_stats(&shelters, &alerts))
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_stats, BandCounts, DashboardInteractor, DashboardInteractorImpl};
    use crate::alerts::test_support::alert;
    use crate::alerts::MockAlertsRepo;
    use crate::shelters::list_shelters::MockShelterListRepo;
    use crate::shelters::test_support::shelter;
    use entities::hazards::{HazardKind, Severity};
    use entities::shelters::{Capacity, Shelter, ShelterStatus};
    use std::sync::Arc;

    fn with_capacity(mut shelter: Shelter, capacity: u32) -> Shelter {
        shelter.capacity = Capacity::try_from(capacity).unwrap();
        shelter
    }

    fn network() -> Vec<Shelter> {
        let mut centro = with_capacity(shelter(3, "Centro Comunitário", 92), 100);
        centro.status = ShelterStatus::Full;
        vec![
            with_capacity(shelter(1, "Abrigo Central", 45), 200),
            with_capacity(shelter(2, "Escola Municipal", 78), 150),
            centro,
            with_capacity(shelter(4, "Igreja da Paz", 31), 80),
            with_capacity(shelter(5, "Ginásio Municipal", 60), 300),
        ]
    }

    #[test]
    fn test_stats_over_a_network() {
        let alerts = vec![
            alert(1, HazardKind::Flood, Severity::High),
            alert(2, HazardKind::Wind, Severity::Low),
        ];

        let stats = compute_stats(&network(), &alerts);

        assert_eq!(stats.total_shelters, 5);
        assert_eq!(stats.open_shelters, 4);
        assert_eq!(stats.people_sheltered, 90 + 117 + 92 + 24 + 180);
        assert_eq!(stats.total_capacity, 830);
        assert_eq!(stats.remaining_places, 830 - 503);
        assert_eq!(stats.overall_occupancy, 60);
        assert_eq!(
            stats.by_band,
            BandCounts {
                available: 2,
                medium: 1,
                high: 1,
                full: 1
            }
        );
        assert_eq!(stats.by_status.full, 1);
        assert_eq!(stats.by_status.closed, 0);
        assert_eq!(stats.active_alerts, 2);
        assert_eq!(stats.highest_severity, Some(Severity::High));
    }

    #[test]
    fn test_empty_network() {
        let stats = compute_stats(&[], &[]);

        assert_eq!(stats.total_shelters, 0);
        assert_eq!(stats.overall_occupancy, 0);
        assert_eq!(stats.remaining_places, 0);
        assert_eq!(stats.highest_severity, None);
    }

    #[test]
    fn test_interactor_combines_both_repos() {
        let mut shelters = MockShelterListRepo::new();
        shelters.expect_all().returning(|| Ok(network()));
        let mut alerts = MockAlertsRepo::new();
        alerts
            .expect_alerts()
            .returning(|| Ok(vec![alert(1, HazardKind::Landslide, Severity::Medium)]));
        let interactor = DashboardInteractorImpl::new(Arc::new(shelters), Arc::new(alerts));

        let stats = interactor.stats().unwrap();

        assert_eq!(stats.people_sheltered, 503);
        assert_eq!(stats.highest_severity, Some(Severity::Medium));
    }
}
