use crate::alerts::{AlertsInteractor, AlertsInteractorImpl};
use crate::dashboard::{DashboardInteractor, DashboardInteractorImpl};
use crate::repositories::Repository;
use crate::shelters::edit_shelter::{EditShelterInteractor, EditShelterInteractorImpl};
use crate::shelters::list_shelters::{ShelterListInteractor, ShelterListInteractorImpl};
use crate::shelters::selection::FindShelterRepo;
use std::sync::Arc;

pub mod actor;
pub mod alerts;
pub mod dashboard;
pub mod repositories;
pub mod shelters;

pub trait App {
    fn shelter_list(&self) -> &dyn ShelterListInteractor;
    fn edit_shelter(&self) -> &dyn EditShelterInteractor;
    fn dashboard(&self) -> &dyn DashboardInteractor;
    fn alerts(&self) -> &dyn AlertsInteractor;
    /// Lookup used to resolve a `ShelterSelection`.
    fn shelter_finder(&self) -> &dyn FindShelterRepo;
}

pub struct AppImpl {
    shelter_list: Arc<dyn ShelterListInteractor>,
    edit_shelter: Arc<dyn EditShelterInteractor>,
    dashboard: Arc<dyn DashboardInteractor>,
    alerts: Arc<dyn AlertsInteractor>,
    shelter_finder: Arc<dyn FindShelterRepo>,
}

impl App for AppImpl {
    fn shelter_list(&self) -> &dyn ShelterListInteractor {
        self.shelter_list.as_ref()
    }

    fn edit_shelter(&self) -> &dyn EditShelterInteractor {
        self.edit_shelter.as_ref()
    }

    fn dashboard(&self) -> &dyn DashboardInteractor {
        self.dashboard.as_ref()
    }

    fn alerts(&self) -> &dyn AlertsInteractor {
        self.alerts.as_ref()
    }

    fn shelter_finder(&self) -> &dyn FindShelterRepo {
        self.shelter_finder.as_ref()
    }
}

impl AppImpl {
    pub fn new<R: Repository + 'static>(repo: R) -> Self {
        let repository = Arc::new(repo);
        let shelter_list = ShelterListInteractorImpl::new(repository.clone());
        let edit_shelter = EditShelterInteractorImpl::new(repository.clone());
        let dashboard = DashboardInteractorImpl::new(repository.clone(), repository.clone());
        let alerts = AlertsInteractorImpl::new(repository.clone());

        Self {
            shelter_list: Arc::new(shelter_list),
            edit_shelter: Arc::new(edit_shelter),
            dashboard: Arc::new(dashboard),
            alerts: Arc::new(alerts),
            shelter_finder: repository,
        }
    }
}
