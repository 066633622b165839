//! Configuration values and override coercion

use serde::Serialize;
use std::fmt;

/// A value read from or written to the configuration tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Text(String),
    /// All leaves below a group path, keyed by their last path segment
    Group(Vec<(String, ConfigValue)>),
}

impl ConfigValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// String form written to persistent storage
    ///
    /// Groups have no storage form.
    pub fn to_storage_string(&self) -> Option<String> {
        match self {
            ConfigValue::Bool(b) => Some(b.to_string()),
            ConfigValue::Text(s) => Some(s.clone()),
            ConfigValue::Group(_) => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Text(s) => f.write_str(s),
            ConfigValue::Group(entries) => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

/// Interpret a raw override string from the URL or persistent storage
///
/// Case-insensitive:
/// - `true`, `on`, `yes` become `Bool(true)`
/// - `false`, `off`, `no` become `Bool(false)`
/// - anything else is passed through unchanged as `Text`
pub fn coerce_override(raw: &str) -> ConfigValue {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => ConfigValue::Bool(true),
        "false" | "off" | "no" => ConfigValue::Bool(false),
        _ => ConfigValue::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_words() {
        for raw in ["true", "TRUE", "On", "on", "YES", "yes"] {
            assert_eq!(coerce_override(raw), ConfigValue::Bool(true), "{}", raw);
        }
    }

    #[test]
    fn test_falsy_words() {
        for raw in ["false", "FALSE", "Off", "off", "NO", "no"] {
            assert_eq!(coerce_override(raw), ConfigValue::Bool(false), "{}", raw);
        }
    }

    #[test]
    fn test_other_strings_pass_through_verbatim() {
        assert_eq!(coerce_override("Column"), ConfigValue::Text("Column".into()));
        assert_eq!(coerce_override("yess"), ConfigValue::Text("yess".into()));
        assert_eq!(coerce_override("1"), ConfigValue::Text("1".into()));
        assert_eq!(coerce_override(""), ConfigValue::Text(String::new()));
    }

    #[test]
    fn test_storage_string() {
        assert_eq!(ConfigValue::Bool(false).to_storage_string().as_deref(), Some("false"));
        assert_eq!(ConfigValue::from("dark").to_storage_string().as_deref(), Some("dark"));
        assert_eq!(ConfigValue::Group(Vec::new()).to_storage_string(), None);
    }
}
