use anyhow::anyhow;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Deserialize)]
pub enum Permission {
    #[serde(rename = "edit:shelters")]
    EditShelters,
}

#[derive(Debug, Default)]
pub struct Permissions {
    permissions: HashSet<Permission>,
}

impl Permissions {
    fn contains(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

impl From<&[String]> for Permissions {
    fn from(value: &[String]) -> Self {
        #[derive(Deserialize, Debug)]
        #[serde(untagged)]
        enum MaybePermission {
            Yes(Permission),
            No(serde_json::Value),
        }
        let json_string_array = serde_json::to_string(&value).unwrap_or_default();
        let permissions = serde_json::from_str::<Vec<MaybePermission>>(&json_string_array)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|maybe| match maybe {
                MaybePermission::Yes(p) => Some(p),
                MaybePermission::No(_) => None,
            })
            .collect();
        Self { permissions }
    }
}

/// The authenticated caller. Credentials are checked before an actor reaches
/// the interactors; they only see what it is allowed to do.
#[cfg_attr(test, automock)]
pub trait Actor: Send + Sync {
    fn permissions(&self) -> Permissions;

    fn external_id(&self) -> String;

    fn check_for_permission(&self, permission: Permission) -> anyhow::Result<()> {
        match self.permissions().contains(permission) {
            true => Ok(()),
            false => Err(anyhow!("Unauthorized")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Permission, Permissions};

    #[test]
    fn test_unknown_permissions_are_ignored() {
        let raw = vec![
            "read:shelters".to_string(),
            "edit:shelters".to_string(),
            "".to_string(),
        ];
        let permissions = Permissions::from(raw.as_slice());
        assert!(permissions.contains(Permission::EditShelters));
        assert_eq!(permissions.permissions.len(), 1);
    }

    #[test]
    fn test_no_permissions() {
        let raw: Vec<String> = vec![];
        let permissions = Permissions::from(raw.as_slice());
        assert!(!permissions.contains(Permission::EditShelters));
    }
}
