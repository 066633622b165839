//! Override values loaded from the URL and persistent storage

use super::path::ConfigKey;
use crate::storage::{QuerySource, Storage};
use std::collections::BTreeMap;

/// Prefix prepended to a dot-path when looking it up in the URL query
pub const QUERY_PREFIX: &str = "judge0.";

/// Raw override strings, keyed by configuration leaf
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedOverrides {
    entries: BTreeMap<ConfigKey, String>,
}

impl LoadedOverrides {
    /// Read every configuration leaf from the override sources
    ///
    /// Sources are tried key by key: the query parameter
    /// `judge0.<dot-path>` first, then the storage entry `<dot-path>`. The
    /// first non-empty value wins; keys with no value are left out.
    pub fn load<Q, S>(query: &Q, storage: &S) -> Self
    where
        Q: QuerySource + ?Sized,
        S: Storage + ?Sized,
    {
        let mut entries = BTreeMap::new();

        for key in ConfigKey::ALL {
            let from_query = query
                .get(&format!("{}{}", QUERY_PREFIX, key.path()))
                .filter(|v| !v.is_empty());
            let value = from_query.or_else(|| storage.get(key.path()).filter(|v| !v.is_empty()));

            if let Some(value) = value {
                tracing::debug!("Override {} = {:?}", key, value);
                entries.insert(key, value);
            }
        }

        Self { entries }
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: ConfigKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Overrides in key declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, QueryParams};

    #[test]
    fn test_query_takes_precedence_over_storage() {
        let query = QueryParams::from_query("judge0.theme=dark");
        let storage = MemoryStorage::with_entries([("theme", "light"), ("style", "minimal")]);

        let loaded = LoadedOverrides::load(&query, &storage);
        assert_eq!(loaded.get(ConfigKey::Theme), Some("dark"));
        assert_eq!(loaded.get(ConfigKey::Style), Some("minimal"));
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_empty_query_value_falls_through_to_storage() {
        let query = QueryParams::from_query("judge0.theme=");
        let storage = MemoryStorage::with_entries([("theme", "light")]);

        let loaded = LoadedOverrides::load(&query, &storage);
        assert_eq!(loaded.get(ConfigKey::Theme), Some("light"));
    }

    #[test]
    fn test_unprefixed_query_and_unknown_keys_are_ignored() {
        let query = QueryParams::from_query("theme=dark&judge0.bogus=1");
        let storage = MemoryStorage::with_entries([("styleOptions.bogus", "yes"), ("apiKey", "x")]);

        let loaded = LoadedOverrides::load(&query, &storage);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_iteration_order_follows_key_declaration() {
        let storage = MemoryStorage::with_entries([
            ("appOptions.ioLayout", "row"),
            ("theme", "dark"),
            ("styleOptions.showLogo", "no"),
        ]);
        let loaded = LoadedOverrides::load(&QueryParams::empty(), &storage);
        let keys: Vec<_> = loaded.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![ConfigKey::Theme, ConfigKey::ShowLogo, ConfigKey::IoLayout]
        );
    }
}
