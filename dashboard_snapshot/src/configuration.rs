use serde::Deserialize;
use shared_kernel::configuration::config;
use std::path::PathBuf;
use use_cases::shelters::list_shelters::ShelterListQuery;

#[derive(Debug, Default, Deserialize)]
pub struct SeedSettings {
    /// YAML seed document. The built-in seed is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub seed: SeedSettings,
    #[serde(default)]
    pub list: ShelterListQuery,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Self> {
        config::<Settings>()
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use shared_kernel::configuration::config_in;
    use std::fs;
    use use_cases::shelters::collection::SortKey;

    #[test]
    fn test_list_query_is_read_from_configuration() {
        let directory = tempfile::tempdir().unwrap();
        fs::write(
            directory.path().join("base.yaml"),
            "seed:\n  path: seeds/flood.yaml\nlist:\n  search: centro\n  only_available: true\n  sort_by: capacity\n",
        )
        .unwrap();

        let settings = config_in::<Settings>(directory.path()).unwrap();

        assert_eq!(
            settings.seed.path.as_deref(),
            Some(std::path::Path::new("seeds/flood.yaml"))
        );
        assert_eq!(settings.list.search, "centro");
        assert!(settings.list.only_available);
        assert_eq!(settings.list.sort_by, Some(SortKey::Capacity));
    }

    #[test]
    fn test_everything_is_optional() {
        let directory = tempfile::tempdir().unwrap();
        fs::write(directory.path().join("base.yaml"), "list: {}\n").unwrap();

        let settings = config_in::<Settings>(directory.path()).unwrap();

        assert_eq!(settings.seed.path, None);
        assert_eq!(settings.list.sort_by, None);
        assert!(!settings.list.only_available);
    }
}
