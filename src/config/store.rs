//! The configuration store
//!
//! [`ConfigStore`] is the context object handed to whatever code needs
//! settings. It is created once at application start; the first access
//! builds the configuration from the default preset and the loaded
//! overrides, and every later access returns that same instance.
//!
//! Paths outside the typed tree are kept as extra entries next to it, so a
//! write to `editor.fontSize` reads back like any other setting.
//!
//! Failures never surface from here. An illegal or ill-typed write leaves
//! the prior value in place, an unknown path reads as `None`, and a storage
//! failure is logged and otherwise ignored.

use super::legal;
use super::overrides::LoadedOverrides;
use super::path::{self, Assignment, ConfigKey, LeafKind, Resolved};
use super::presets;
use super::schema::{Configuration, Style};
use super::value::{coerce_override, ConfigValue};
use crate::storage::{QuerySource, Storage};
use std::cell::OnceCell;
use std::collections::BTreeMap;

/// Initialised state: the live configuration and the overrides it was built from
#[derive(Debug)]
struct State {
    loaded: LoadedOverrides,
    config: Configuration,
    /// Values written at paths outside the typed tree
    extra: BTreeMap<String, ConfigValue>,
}

impl State {
    fn initialise<Q: QuerySource, S: Storage>(query: &Q, storage: &S) -> Self {
        let loaded = LoadedOverrides::load(query, storage);
        let mut config = presets::preset(Style::Default);
        merge(&mut config, &loaded, |_| true);

        tracing::debug!(
            "Configuration initialised: style={}, theme={}, {} override(s)",
            config.style,
            config.theme,
            loaded.len()
        );

        Self {
            loaded,
            config,
            extra: BTreeMap::new(),
        }
    }
}

/// Settings store backed by URL query parameters and persistent storage
pub struct ConfigStore<S, Q> {
    storage: S,
    query: Q,
    state: OnceCell<State>,
}

impl<S: Storage, Q: QuerySource> ConfigStore<S, Q> {
    /// Create a store; nothing is read until first access
    pub fn new(storage: S, query: Q) -> Self {
        Self {
            storage,
            query,
            state: OnceCell::new(),
        }
    }

    /// One-time initialisation, run at page load
    ///
    /// Calling it again has no effect.
    pub fn load(&self) {
        self.state();
    }

    fn state(&self) -> &State {
        self.state
            .get_or_init(|| State::initialise(&self.query, &self.storage))
    }

    /// The live configuration
    pub fn configuration(&self) -> &Configuration {
        &self.state().config
    }

    /// Overrides read from the query and storage at initialisation
    pub fn loaded_overrides(&self) -> &LoadedOverrides {
        &self.state().loaded
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All leaf dot-paths, in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        ConfigKey::ALL.into_iter().map(ConfigKey::path)
    }

    /// Read the value at a dot-path
    ///
    /// Paths outside the configuration tree read the extra entries written
    /// through [`set`](Self::set), then fall back to the raw string in
    /// persistent storage.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        if key.is_empty() {
            return None;
        }

        let state = self.state();
        path::lookup(&state.config, key)
            .or_else(|| extra_lookup(&state.extra, key))
            .or_else(|| self.storage.get(key).map(ConfigValue::Text))
    }

    /// Write the value at a dot-path and return the value now held there
    ///
    /// The write is dropped if the value is outside the key's legal set or
    /// does not fit the key's type. Setting `style` resets both option
    /// groups to the chosen preset and re-applies the loaded overrides on
    /// top. Paths outside the typed tree are kept as extra entries, and
    /// writes to a whole group are ignored. With `persist`, the value now
    /// held is also written to persistent storage.
    pub fn set(
        &mut self,
        key: &str,
        value: impl Into<ConfigValue>,
        persist: bool,
    ) -> Option<ConfigValue> {
        let value = value.into();

        let leaf = match path::resolve(key) {
            Resolved::Leaf(leaf) => leaf,
            Resolved::Group(group) => {
                tracing::debug!("Ignoring write to group {:?}", group);
                return self.get(key);
            }
            Resolved::Missing => return self.set_extra(key, value, persist),
        };

        self.state();
        let current = match self.state.get_mut() {
            Some(State { loaded, config, .. }) => {
                write(config, loaded, leaf, &value);
                path::read(config, leaf)
            }
            None => return None,
        };

        if persist {
            if let Some(raw) = current.to_storage_string() {
                self.persist(leaf.path(), &raw);
            }
        }

        Some(current)
    }

    /// Write a path with no slot in the typed tree
    fn set_extra(&mut self, key: &str, value: ConfigValue, persist: bool) -> Option<ConfigValue> {
        self.state();
        let Some(State { extra, .. }) = self.state.get_mut() else {
            return None;
        };
        if !extra_writable(extra, key) {
            tracing::debug!("No configuration slot can be created at '{}'", key);
            return self.get(key);
        }

        tracing::debug!("Setting extra configuration '{}'", key);
        let nested = format!("{}.", key);
        extra.retain(|k, _| !k.starts_with(&nested));
        extra.insert(key.to_string(), value.clone());

        if persist {
            if let Some(raw) = value.to_storage_string() {
                self.persist(key, &raw);
            }
        }
        Some(value)
    }

    fn persist(&mut self, key: &str, raw: &str) {
        if let Err(e) = self.storage.set(key, raw) {
            tracing::warn!("Failed to persist {}: {}", key, e);
        }
    }
}

/// Apply a validated write, cascading a style change
fn write(
    config: &mut Configuration,
    loaded: &LoadedOverrides,
    key: ConfigKey,
    value: &ConfigValue,
) -> Assignment {
    if !legal::is_legal(key, value) {
        tracing::debug!("Rejected illegal value {:?} for {}", value, key);
        return Assignment::Rejected;
    }

    let outcome = path::assign(config, key, value);
    match outcome {
        Assignment::Rejected => {
            tracing::debug!("Rejected {:?} for {}: wrong kind", value, key);
        }
        Assignment::Changed if key == ConfigKey::Style => {
            let preset = presets::preset(config.style);
            config.style_options = preset.style_options;
            config.app_options = preset.app_options;
            merge(config, loaded, |key| key.group().is_some());
            tracing::debug!("Switched to style '{}'", config.style);
        }
        _ => {}
    }
    outcome
}

/// Whether an extra entry can live at `key`
///
/// Every segment must be non-empty and no proper prefix may already hold a
/// leaf, either in the typed tree or among the extras.
fn extra_writable(extra: &BTreeMap<String, ConfigValue>, key: &str) -> bool {
    if key.split('.').any(str::is_empty) {
        return false;
    }
    !key.match_indices('.').any(|(end, _)| {
        let prefix = &key[..end];
        matches!(path::resolve(prefix), Resolved::Leaf(_)) || extra.contains_key(prefix)
    })
}

/// Read an extra entry, or the subtree of entries below `key`
fn extra_lookup(extra: &BTreeMap<String, ConfigValue>, key: &str) -> Option<ConfigValue> {
    if let Some(value) = extra.get(key) {
        return Some(value.clone());
    }

    let nested = format!("{}.", key);
    let mut children: Vec<String> = Vec::new();
    for rest in extra.keys().filter_map(|k| k.strip_prefix(&nested)) {
        let child = rest.split('.').next().unwrap_or(rest);
        if !children.iter().any(|c| c == child) {
            children.push(child.to_string());
        }
    }
    if children.is_empty() {
        return None;
    }

    let entries = children
        .into_iter()
        .filter_map(|child| {
            let value = extra_lookup(extra, &format!("{}{}", nested, child))?;
            Some((child, value))
        })
        .collect();
    Some(ConfigValue::Group(entries))
}

/// Write every loaded override accepted by `filter` into `config`
fn merge(config: &mut Configuration, loaded: &LoadedOverrides, filter: impl Fn(ConfigKey) -> bool) {
    for (key, raw) in loaded.iter().filter(|(key, _)| filter(*key)) {
        let value = match key.kind() {
            LeafKind::Flag => coerce_override(raw),
            LeafKind::Choice | LeafKind::Text => ConfigValue::Text(raw.to_string()),
        };
        write(config, loaded, key, &value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{Layout, Theme};
    use crate::storage::{MemoryStorage, MockQuerySource, MockStorage, QueryParams, StorageError};

    fn store_with(
        storage: &[(&str, &str)],
        query: &str,
    ) -> ConfigStore<MemoryStorage, QueryParams> {
        ConfigStore::new(
            MemoryStorage::with_entries(storage.iter().copied()),
            QueryParams::from_query(query),
        )
    }

    #[test]
    fn test_defaults_without_overrides() {
        let store = store_with(&[], "");
        assert_eq!(store.configuration(), &presets::preset(Style::Default));
        assert!(store.loaded_overrides().is_empty());
    }

    #[test]
    fn test_initial_style_override_applies_preset() {
        let store = store_with(&[("style", "minimal")], "judge0.styleOptions.showLogo=yes");
        let config = store.configuration();
        assert_eq!(config.style, Style::Minimal);
        assert!(config.style_options.show_logo);
        assert!(!config.style_options.show_copyright);
        assert_eq!(config.app_options.io_layout, Layout::Column);
    }

    #[test]
    fn test_illegal_override_keeps_default() {
        let store = store_with(&[("theme", "sepia"), ("appOptions.ioLayout", "grid")], "");
        assert_eq!(store.configuration().theme, Theme::System);
        assert_eq!(store.configuration().app_options.io_layout, Layout::Stack);
    }

    #[test]
    fn test_configuration_is_built_once() {
        let mut query = MockQuerySource::new();
        query
            .expect_get()
            .times(ConfigKey::ALL.len())
            .returning(|name| (name == "judge0.theme").then(|| "dark".to_string()));
        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .times(ConfigKey::ALL.len() - 1)
            .returning(|_| None);

        let store = ConfigStore::new(storage, query);
        store.load();
        store.load();
        let first = store.configuration() as *const Configuration;
        let second = store.configuration() as *const Configuration;
        assert_eq!(first, second);
        assert_eq!(store.configuration().theme, Theme::Dark);
    }

    #[test]
    fn test_failed_persist_keeps_live_value() {
        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| None);
        storage.expect_set().times(1).returning(|_, _| {
            Err(StorageError::Write {
                path: "storage.yaml".into(),
                source: std::io::Error::other("disk full"),
            })
        });

        let mut store = ConfigStore::new(storage, QueryParams::empty());
        assert_eq!(
            store.set("theme", "dark", true),
            Some(ConfigValue::from("dark"))
        );
        assert_eq!(store.configuration().theme, Theme::Dark);
    }

    #[test]
    fn test_write_reports_outcome() {
        let mut config = Configuration::default();
        let loaded = LoadedOverrides::default();
        assert_eq!(
            write(&mut config, &loaded, ConfigKey::Theme, &"light".into()),
            Assignment::Changed
        );
        assert_eq!(
            write(&mut config, &loaded, ConfigKey::Theme, &"light".into()),
            Assignment::Unchanged
        );
        assert_eq!(
            write(&mut config, &loaded, ConfigKey::Theme, &"pink".into()),
            Assignment::Rejected
        );
    }
}
