use entities::shelters::{Shelter, ShelterId};
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait FindShelterRepo: Send + Sync {
    fn get(&self, id: ShelterId) -> anyhow::Result<Option<Shelter>>;
}

/// The shelter highlighted in the list and on the map. Only the id is kept;
/// the record is always read back from the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShelterSelection {
    selected: Option<ShelterId>,
}

impl ShelterSelection {
    pub fn select(&mut self, id: ShelterId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<ShelterId> {
        self.selected
    }

    /// A stale id (removed from the store since it was picked) resolves to `None`.
    pub fn resolve(&self, repo: &dyn FindShelterRepo) -> anyhow::Result<Option<Shelter>> {
        match self.selected {
            Some(id) => repo.get(id),
            None => Ok(None),
        }
    }
}
