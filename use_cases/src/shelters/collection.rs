use crate::shelters::classification::is_available;
use entities::shelters::Shelter;
use entities::warnings::NotFoundWarning;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Nearest first.
    Distance,
    /// Least occupied first.
    Occupancy,
    /// Largest first.
    Capacity,
}

fn matches_query(shelter: &Shelter, query: &str) -> bool {
    shelter.name.as_ref().to_lowercase().contains(query)
        || shelter.address.to_lowercase().contains(query)
}

/// Case-insensitive substring search on name or address, optionally limited to
/// available shelters. Keeps the input order.
pub fn filter_shelters(shelters: &[Shelter], query: &str, only_available: bool) -> Vec<Shelter> {
    let query = query.to_lowercase();
    shelters
        .iter()
        .filter(|shelter| matches_query(shelter, &query))
        .filter(|shelter| !only_available || is_available(shelter))
        .cloned()
        .collect()
}

/// Stable: shelters with equal keys keep their relative order.
pub fn sort_shelters(shelters: &[Shelter], key: SortKey) -> Vec<Shelter> {
    let mut sorted = shelters.to_vec();
    match key {
        SortKey::Distance => sorted.sort_by(|a, b| a.distance.km().total_cmp(&b.distance.km())),
        SortKey::Occupancy => sorted.sort_by_key(|shelter| shelter.occupancy),
        SortKey::Capacity => sorted.sort_by(|a, b| b.capacity.cmp(&a.capacity)),
    }
    sorted
}

/// Replaces the shelter with the same id. Nothing is inserted for an unknown id;
/// the caller keeps its collection as it was.
pub fn update_shelter(
    shelters: &[Shelter],
    updated: Shelter,
) -> Result<Vec<Shelter>, NotFoundWarning> {
    let position = shelters
        .iter()
        .position(|shelter| shelter.id == updated.id)
        .ok_or(NotFoundWarning { id: updated.id })?;

    let mut result = shelters.to_vec();
    result[position] = updated;
    Ok(result)
}
