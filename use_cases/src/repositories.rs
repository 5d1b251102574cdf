use crate::alerts::AlertsRepo;
use crate::shelters::edit_shelter::EditShelterRepo;
use crate::shelters::list_shelters::ShelterListRepo;
use crate::shelters::selection::FindShelterRepo;

pub trait Repository:
    ShelterListRepo + FindShelterRepo + EditShelterRepo + AlertsRepo + Clone
{
}

impl<T> Repository for T where
    T: Clone + ShelterListRepo + FindShelterRepo + EditShelterRepo + AlertsRepo
{
}
