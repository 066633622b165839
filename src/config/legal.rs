//! Legal value enumerations
//!
//! Keys listed here only accept one of a fixed set of strings. Every other
//! key is unrestricted apart from its value kind.

use super::path::ConfigKey;
use super::value::ConfigValue;

pub const THEMES: &[&str] = &["system", "reverse-system", "light", "dark"];
pub const STYLES: &[&str] = &["default", "minimal", "standalone", "electron", "puter"];
pub const LAYOUTS: &[&str] = &["stack", "row", "column"];

/// Legal values for a key, if the key is enumerated
pub fn legal_values(key: ConfigKey) -> Option<&'static [&'static str]> {
    match key {
        ConfigKey::Theme => Some(THEMES),
        ConfigKey::Style => Some(STYLES),
        ConfigKey::IoLayout | ConfigKey::AssistantLayout => Some(LAYOUTS),
        _ => None,
    }
}

/// Whether `value` may be written to `key`
pub fn is_legal(key: ConfigKey, value: &ConfigValue) -> bool {
    match legal_values(key) {
        Some(allowed) => value.as_str().is_some_and(|v| allowed.contains(&v)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{Layout, Style, Theme};

    #[test]
    fn test_tables_match_enum_variants() {
        let themes: Vec<_> = Theme::ALL.iter().map(|t| t.as_str()).collect();
        let styles: Vec<_> = Style::ALL.iter().map(|s| s.as_str()).collect();
        let layouts: Vec<_> = Layout::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(themes, THEMES);
        assert_eq!(styles, STYLES);
        assert_eq!(layouts, LAYOUTS);
    }

    #[test]
    fn test_enumerated_keys() {
        assert!(is_legal(ConfigKey::Theme, &"dark".into()));
        assert!(!is_legal(ConfigKey::Theme, &"sepia".into()));
        assert!(!is_legal(ConfigKey::Theme, &true.into()));
        assert!(is_legal(ConfigKey::AssistantLayout, &"stack".into()));
        assert!(!is_legal(ConfigKey::IoLayout, &"grid".into()));
    }

    #[test]
    fn test_unrestricted_keys() {
        assert_eq!(legal_values(ConfigKey::MainLayout), None);
        assert!(is_legal(ConfigKey::MainLayout, &"anything".into()));
        assert!(is_legal(ConfigKey::ApiKey, &"sk-123".into()));
        assert!(is_legal(ConfigKey::ShowLogo, &false.into()));
    }
}
