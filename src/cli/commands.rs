//! CLI command handlers

use anyhow::{bail, Context, Result};
use clap::Subcommand;

use judge0_ide::config::{
    coerce_override, legal, paths, presets, ConfigKey, ConfigStore, ConfigValue, LeafKind,
};
use judge0_ide::storage::{FileStorage, QueryParams, Storage};

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value (all configuration when no key is given)
    Get {
        /// Configuration key (e.g., "theme", "appOptions.ioLayout")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "theme", "appOptions.ioLayout")
        key: String,
        /// Configuration value
        value: String,
        /// Apply for this invocation only, without writing to storage
        #[arg(long)]
        no_save: bool,
    },
    /// List all configuration
    List {
        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// List configuration keys and their accepted values
    Keys,
    /// List style presets
    Presets,
    /// Show storage file path
    Path,
}

type Store = ConfigStore<FileStorage, QueryParams>;

fn open_store(url: Option<&str>) -> Result<Store> {
    let storage = FileStorage::open_default().context("Failed to open settings storage")?;
    let query = match url {
        Some(url) => QueryParams::from_url(url).with_context(|| format!("Invalid URL: {}", url))?,
        None => QueryParams::empty(),
    };
    Ok(ConfigStore::new(storage, query))
}

/// Handle configuration subcommands
///
/// `url` is the page URL whose query parameters override stored values.
pub fn handle_config_command(cmd: ConfigSubcommand, url: Option<&str>) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            let store = open_store(url)?;

            if let Some(key) = key {
                match store.get(&key) {
                    Some(value) => println!("{}", value),
                    None => bail!("Unknown configuration key: {}", key),
                }
            } else {
                let yaml = serde_yaml::to_string(store.configuration())
                    .context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set {
            key,
            value,
            no_save,
        } => {
            let mut store = open_store(url)?;

            if let Some(leaf) = ConfigKey::from_path(&key) {
                validate(leaf, &value)?;
            }

            let current = store
                .set(&key, value.as_str(), !no_save)
                .and_then(|v| v.to_storage_string())
                .unwrap_or(value);
            println!("{} = {}", key, current);

            if !no_save {
                // the store only logs storage failures, so check the write landed
                if store.storage().get(&key).as_deref() != Some(current.as_str()) {
                    bail!(
                        "Failed to save configuration to {}",
                        store.storage().path().display()
                    );
                }
                println!("Configuration saved");
            }
        }
        ConfigSubcommand::List { json } => {
            let store = open_store(url)?;
            let rendered = if json {
                serde_json::to_string_pretty(store.configuration())
                    .context("Failed to serialize configuration")?
                    + "\n"
            } else {
                serde_yaml::to_string(store.configuration())
                    .context("Failed to serialize configuration")?
            };
            print!("{}", rendered);
        }
        ConfigSubcommand::Keys => {
            for key in ConfigKey::ALL {
                let accepted = match (key.kind(), legal::legal_values(key)) {
                    (_, Some(values)) => values.join(" | "),
                    (LeafKind::Flag, None) => "true | false".to_string(),
                    _ => "<text>".to_string(),
                };
                println!("{:<45} {}", key.path(), accepted);
            }
        }
        ConfigSubcommand::Presets => {
            let store = open_store(url)?;
            let active = store.configuration().style.as_str();
            println!("Available presets:");
            for name in presets::preset_names() {
                let marker = if name == active { " (active)" } else { "" };
                println!("  - {}{}", name, marker);
            }
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::storage_path().display());
        }
    }

    Ok(())
}

/// Reject values the store would silently drop
fn validate(key: ConfigKey, value: &str) -> Result<()> {
    if let Some(allowed) = legal::legal_values(key) {
        if !allowed.contains(&value) {
            bail!(
                "{} must be one of: {} (got '{}')",
                key,
                allowed.join(", "),
                value
            );
        }
    }
    if key.kind() == LeafKind::Flag && !matches!(coerce_override(value), ConfigValue::Bool(_)) {
        bail!(
            "{} must be a boolean (true/false, on/off, yes/no), got '{}'",
            key,
            value
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate(ConfigKey::Theme, "dark").is_ok());
        assert!(validate(ConfigKey::Theme, "sepia").is_err());
        assert!(validate(ConfigKey::ShowLogo, "Off").is_ok());
        assert!(validate(ConfigKey::ShowLogo, "maybe").is_err());
        assert!(validate(ConfigKey::ApiKey, "anything").is_ok());
    }
}
