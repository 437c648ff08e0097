use crate::config::toml_config::DirectoryConfig;
use crate::domain::model::{Region, Store};

/// Immutable region → store-number → store lookup, built once at startup.
#[derive(Debug, Clone)]
pub struct StoreDirectory {
    province: String,
    regions: Vec<Region>,
}

impl StoreDirectory {
    pub fn new(province: &str, regions: Vec<Region>) -> Self {
        Self {
            province: province.to_string(),
            regions,
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        let regions = config
            .regions
            .iter()
            .map(|region| Region {
                key: region.key.clone(),
                name: region.name.clone(),
                stores: region
                    .stores
                    .iter()
                    .map(|s| {
                        (
                            s.number.clone(),
                            Store {
                                name: s.name.clone(),
                                id: s.id.clone(),
                            },
                        )
                    })
                    .collect(),
            })
            .collect();

        Self::new(&config.province, regions)
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Case-insensitive; `None` for unknown keys.
    pub fn region(&self, key: &str) -> Option<&Region> {
        let key = key.trim().to_lowercase();
        self.regions.iter().find(|r| r.key == key)
    }

    /// Every store keyed as `region-number`, in directory order.
    pub fn all_stores(&self) -> Vec<(String, &Store)> {
        self.regions
            .iter()
            .flat_map(|region| {
                region
                    .stores
                    .iter()
                    .map(move |(number, store)| (format!("{}-{}", region.key, number), store))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.regions.iter().map(Region::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::WatcherConfig;
    use std::collections::HashSet;

    fn builtin() -> StoreDirectory {
        StoreDirectory::from_config(&WatcherConfig::builtin().unwrap().directory)
    }

    #[test]
    fn test_region_lookup() {
        let directory = builtin();

        let lund = directory.region("lund").unwrap();
        assert_eq!(lund.name, "Lund");
        assert_eq!(lund.len(), 5);
        assert_eq!(lund.store("1").unwrap().id, "tuna-lund");
        assert_eq!(lund.store(" 3 ").unwrap().name, "ICA Supermarket Mårten");
        assert!(lund.store("6").is_none());

        assert!(directory.region("  Malmo ").is_some());
        assert!(directory.region("helsingborg").is_none());
    }

    #[test]
    fn test_all_stores_size_and_unique_keys() {
        let directory = builtin();
        let all = directory.all_stores();

        let per_region: usize = directory.regions().iter().map(|r| r.len()).sum();
        assert_eq!(all.len(), per_region);
        assert_eq!(all.len(), directory.len());

        let keys: HashSet<&str> = all.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys.len(), all.len());

        assert_eq!(all[0].0, "lund-1");
        assert_eq!(all[0].1.id, "tuna-lund");
        assert_eq!(all[9].0, "malmo-5");
    }

    #[test]
    fn test_empty_directory() {
        let directory = StoreDirectory::new("Skåne", vec![]);
        assert!(directory.is_empty());
        assert!(directory.all_stores().is_empty());
        assert!(directory.region("lund").is_none());
    }
}
