use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Water,
    Food,
    Medical,
    Power,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Water,
        ResourceKind::Food,
        ResourceKind::Medical,
        ResourceKind::Power,
    ];
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyLevel {
    Low,
    Medium,
    Good,
}

/// Records report either a plain yes/no flag or a supply level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceAvailability {
    Flag(bool),
    Level(SupplyLevel),
}

impl ResourceAvailability {
    pub fn level(&self) -> SupplyLevel {
        match self {
            ResourceAvailability::Flag(true) => SupplyLevel::Good,
            ResourceAvailability::Flag(false) => SupplyLevel::Low,
            ResourceAvailability::Level(level) => *level,
        }
    }
}

/// Keys other than the four known kinds are dropped when deserializing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<ResourceAvailability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<ResourceAvailability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical: Option<ResourceAvailability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<ResourceAvailability>,
}

impl Resources {
    pub fn get(&self, kind: ResourceKind) -> Option<ResourceAvailability> {
        match kind {
            ResourceKind::Water => self.water,
            ResourceKind::Food => self.food,
            ResourceKind::Medical => self.medical,
            ResourceKind::Power => self.power,
        }
    }

    /// Reported resources in `ResourceKind::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, ResourceAvailability)> + '_ {
        ResourceKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|availability| (kind, availability)))
    }
}
