//! Dot-path addressing over the typed configuration tree
//!
//! Every leaf of [`Configuration`] has a [`ConfigKey`]. Paths such as
//! `appOptions.ioLayout` resolve to a key, a group, or nothing at all;
//! nothing is never an error.

use super::schema::{Configuration, Layout, Style, Theme};
use super::value::{coerce_override, ConfigValue};
use std::fmt;

/// Top-level option group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    StyleOptions,
    AppOptions,
}

impl Group {
    pub fn as_str(self) -> &'static str {
        match self {
            Group::StyleOptions => "styleOptions",
            Group::AppOptions => "appOptions",
        }
    }

    /// Leaves under this group, in declaration order
    pub fn keys(self) -> impl Iterator<Item = ConfigKey> {
        ConfigKey::ALL
            .into_iter()
            .filter(move |key| key.group() == Some(self))
    }
}

/// What kind of value a leaf holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    /// Boolean toggle
    Flag,
    /// One of a fixed set of names
    Choice,
    /// Free-form string
    Text,
}

/// Every addressable leaf of the configuration tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigKey {
    Theme,
    Style,
    ShowLogo,
    ShowFileMenu,
    ShowHelpMenu,
    ShowSelectLanguage,
    ShowCompilerOptions,
    ShowCommandLineArguments,
    ShowRunButton,
    ShowThemeButton,
    ShowPuterSignInOutButton,
    ShowStatusLine,
    ShowCopyright,
    ShowNavigation,
    ShowAiAssistant,
    IoLayout,
    AssistantLayout,
    MainLayout,
    ShowInput,
    ShowOutput,
    ApiKey,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 21] = [
        ConfigKey::Theme,
        ConfigKey::Style,
        ConfigKey::ShowLogo,
        ConfigKey::ShowFileMenu,
        ConfigKey::ShowHelpMenu,
        ConfigKey::ShowSelectLanguage,
        ConfigKey::ShowCompilerOptions,
        ConfigKey::ShowCommandLineArguments,
        ConfigKey::ShowRunButton,
        ConfigKey::ShowThemeButton,
        ConfigKey::ShowPuterSignInOutButton,
        ConfigKey::ShowStatusLine,
        ConfigKey::ShowCopyright,
        ConfigKey::ShowNavigation,
        ConfigKey::ShowAiAssistant,
        ConfigKey::IoLayout,
        ConfigKey::AssistantLayout,
        ConfigKey::MainLayout,
        ConfigKey::ShowInput,
        ConfigKey::ShowOutput,
        ConfigKey::ApiKey,
    ];

    /// Full dot-path of the leaf
    pub fn path(self) -> &'static str {
        match self {
            ConfigKey::Theme => "theme",
            ConfigKey::Style => "style",
            ConfigKey::ShowLogo => "styleOptions.showLogo",
            ConfigKey::ShowFileMenu => "styleOptions.showFileMenu",
            ConfigKey::ShowHelpMenu => "styleOptions.showHelpMenu",
            ConfigKey::ShowSelectLanguage => "styleOptions.showSelectLanguage",
            ConfigKey::ShowCompilerOptions => "styleOptions.showCompilerOptions",
            ConfigKey::ShowCommandLineArguments => "styleOptions.showCommandLineArguments",
            ConfigKey::ShowRunButton => "styleOptions.showRunButton",
            ConfigKey::ShowThemeButton => "styleOptions.showThemeButton",
            ConfigKey::ShowPuterSignInOutButton => "styleOptions.showPuterSignInOutButton",
            ConfigKey::ShowStatusLine => "styleOptions.showStatusLine",
            ConfigKey::ShowCopyright => "styleOptions.showCopyright",
            ConfigKey::ShowNavigation => "styleOptions.showNavigation",
            ConfigKey::ShowAiAssistant => "appOptions.showAIAssistant",
            ConfigKey::IoLayout => "appOptions.ioLayout",
            ConfigKey::AssistantLayout => "appOptions.assistantLayout",
            ConfigKey::MainLayout => "appOptions.mainLayout",
            ConfigKey::ShowInput => "appOptions.showInput",
            ConfigKey::ShowOutput => "appOptions.showOutput",
            ConfigKey::ApiKey => "appOptions.apiKey",
        }
    }

    /// Last segment of the dot-path
    pub fn field_name(self) -> &'static str {
        let path = self.path();
        path.rsplit('.').next().unwrap_or(path)
    }

    pub fn group(self) -> Option<Group> {
        match self.path().split_once('.') {
            Some(("styleOptions", _)) => Some(Group::StyleOptions),
            Some(("appOptions", _)) => Some(Group::AppOptions),
            _ => None,
        }
    }

    pub fn kind(self) -> LeafKind {
        match self {
            ConfigKey::Theme
            | ConfigKey::Style
            | ConfigKey::IoLayout
            | ConfigKey::AssistantLayout => LeafKind::Choice,
            ConfigKey::MainLayout | ConfigKey::ApiKey => LeafKind::Text,
            _ => LeafKind::Flag,
        }
    }

    /// Look up a leaf by its exact dot-path
    pub fn from_path(path: &str) -> Option<ConfigKey> {
        ConfigKey::ALL.into_iter().find(|key| key.path() == path)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Result of resolving a dot-path against the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Leaf(ConfigKey),
    Group(Group),
    Missing,
}

/// Resolve a dot-path
///
/// Walks the path segment by segment; a segment with no match anywhere
/// along the way short-circuits to [`Resolved::Missing`].
pub fn resolve(path: &str) -> Resolved {
    if path.is_empty() {
        return Resolved::Missing;
    }

    let mut segments = path.split('.');
    let head = segments.next().unwrap_or_default();
    let group = match head {
        "styleOptions" => Group::StyleOptions,
        "appOptions" => Group::AppOptions,
        _ => {
            return match segments.next() {
                None => ConfigKey::from_path(head).map_or(Resolved::Missing, Resolved::Leaf),
                Some(_) => Resolved::Missing,
            };
        }
    };

    let Some(field) = segments.next() else {
        return Resolved::Group(group);
    };
    if segments.next().is_some() {
        return Resolved::Missing;
    }

    group
        .keys()
        .find(|key| key.field_name() == field)
        .map_or(Resolved::Missing, Resolved::Leaf)
}

fn flag(config: &Configuration, key: ConfigKey) -> Option<bool> {
    let s = &config.style_options;
    let a = &config.app_options;
    let value = match key {
        ConfigKey::ShowLogo => s.show_logo,
        ConfigKey::ShowFileMenu => s.show_file_menu,
        ConfigKey::ShowHelpMenu => s.show_help_menu,
        ConfigKey::ShowSelectLanguage => s.show_select_language,
        ConfigKey::ShowCompilerOptions => s.show_compiler_options,
        ConfigKey::ShowCommandLineArguments => s.show_command_line_arguments,
        ConfigKey::ShowRunButton => s.show_run_button,
        ConfigKey::ShowThemeButton => s.show_theme_button,
        ConfigKey::ShowPuterSignInOutButton => s.show_puter_sign_in_out_button,
        ConfigKey::ShowStatusLine => s.show_status_line,
        ConfigKey::ShowCopyright => s.show_copyright,
        ConfigKey::ShowNavigation => s.show_navigation,
        ConfigKey::ShowAiAssistant => a.show_ai_assistant,
        ConfigKey::ShowInput => a.show_input,
        ConfigKey::ShowOutput => a.show_output,
        _ => return None,
    };
    Some(value)
}

fn flag_mut(config: &mut Configuration, key: ConfigKey) -> Option<&mut bool> {
    let s = &mut config.style_options;
    let a = &mut config.app_options;
    let slot = match key {
        ConfigKey::ShowLogo => &mut s.show_logo,
        ConfigKey::ShowFileMenu => &mut s.show_file_menu,
        ConfigKey::ShowHelpMenu => &mut s.show_help_menu,
        ConfigKey::ShowSelectLanguage => &mut s.show_select_language,
        ConfigKey::ShowCompilerOptions => &mut s.show_compiler_options,
        ConfigKey::ShowCommandLineArguments => &mut s.show_command_line_arguments,
        ConfigKey::ShowRunButton => &mut s.show_run_button,
        ConfigKey::ShowThemeButton => &mut s.show_theme_button,
        ConfigKey::ShowPuterSignInOutButton => &mut s.show_puter_sign_in_out_button,
        ConfigKey::ShowStatusLine => &mut s.show_status_line,
        ConfigKey::ShowCopyright => &mut s.show_copyright,
        ConfigKey::ShowNavigation => &mut s.show_navigation,
        ConfigKey::ShowAiAssistant => &mut a.show_ai_assistant,
        ConfigKey::ShowInput => &mut a.show_input,
        ConfigKey::ShowOutput => &mut a.show_output,
        _ => return None,
    };
    Some(slot)
}

/// Read a leaf
pub fn read(config: &Configuration, key: ConfigKey) -> ConfigValue {
    let text = match key {
        ConfigKey::Theme => config.theme.as_str().to_string(),
        ConfigKey::Style => config.style.as_str().to_string(),
        ConfigKey::IoLayout => config.app_options.io_layout.as_str().to_string(),
        ConfigKey::AssistantLayout => config.app_options.assistant_layout.as_str().to_string(),
        ConfigKey::MainLayout => config.app_options.main_layout.clone(),
        ConfigKey::ApiKey => config.app_options.api_key.clone(),
        _ => return ConfigValue::Bool(flag(config, key).unwrap_or_default()),
    };
    ConfigValue::Text(text)
}

/// Read a group as the list of its leaves
pub fn read_group(config: &Configuration, group: Group) -> ConfigValue {
    ConfigValue::Group(
        group
            .keys()
            .map(|key| (key.field_name().to_string(), read(config, key)))
            .collect(),
    )
}

/// Read whatever a dot-path resolves to
pub fn lookup(config: &Configuration, path: &str) -> Option<ConfigValue> {
    match resolve(path) {
        Resolved::Leaf(key) => Some(read(config, key)),
        Resolved::Group(group) => Some(read_group(config, group)),
        Resolved::Missing => None,
    }
}

/// Outcome of writing a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Changed,
    /// The leaf already held the value
    Unchanged,
    /// The value does not fit the leaf's kind
    Rejected,
}

/// Write a leaf, converting the value to the leaf's type
///
/// Flags accept booleans and the boolean words understood by
/// [`coerce_override`]. Choices accept only their variant names. Free
/// text accepts any string.
pub fn assign(config: &mut Configuration, key: ConfigKey, value: &ConfigValue) -> Assignment {
    match key.kind() {
        LeafKind::Flag => {
            let new = match value {
                ConfigValue::Bool(b) => *b,
                ConfigValue::Text(s) => match coerce_override(s) {
                    ConfigValue::Bool(b) => b,
                    _ => return Assignment::Rejected,
                },
                ConfigValue::Group(_) => return Assignment::Rejected,
            };
            match flag_mut(config, key) {
                Some(slot) => replace(slot, new),
                None => Assignment::Rejected,
            }
        }
        LeafKind::Choice => {
            let Some(name) = value.as_str() else {
                return Assignment::Rejected;
            };
            let parsed = match key {
                ConfigKey::Theme => name.parse::<Theme>().map(|v| replace(&mut config.theme, v)),
                ConfigKey::Style => name.parse::<Style>().map(|v| replace(&mut config.style, v)),
                ConfigKey::IoLayout => name
                    .parse::<Layout>()
                    .map(|v| replace(&mut config.app_options.io_layout, v)),
                ConfigKey::AssistantLayout => name
                    .parse::<Layout>()
                    .map(|v| replace(&mut config.app_options.assistant_layout, v)),
                _ => return Assignment::Rejected,
            };
            parsed.unwrap_or(Assignment::Rejected)
        }
        LeafKind::Text => {
            let Some(text) = value.as_str() else {
                return Assignment::Rejected;
            };
            let slot = match key {
                ConfigKey::MainLayout => &mut config.app_options.main_layout,
                ConfigKey::ApiKey => &mut config.app_options.api_key,
                _ => return Assignment::Rejected,
            };
            if *slot == text {
                Assignment::Unchanged
            } else {
                *slot = text.to_string();
                Assignment::Changed
            }
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> Assignment {
    if *slot == value {
        Assignment::Unchanged
    } else {
        *slot = value;
        Assignment::Changed
    }
}
