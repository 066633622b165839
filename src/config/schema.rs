//! Configuration schema definitions
//!
//! Defines the typed configuration tree consumed by the IDE rendering code.
//! Field names serialize in camelCase so the dot-paths match the keys used
//! in URL query parameters and persistent storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Color theme
    #[serde(default)]
    pub theme: Theme,

    /// Name of the active style preset
    #[serde(default)]
    pub style: Style,

    /// Visibility of the page chrome
    #[serde(default)]
    pub style_options: StyleOptions,

    /// Application behaviour and layout
    #[serde(default)]
    pub app_options: AppOptions,
}

/// Visibility toggles for the page chrome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
    #[serde(default = "default_true")]
    pub show_logo: bool,
    #[serde(default = "default_true")]
    pub show_file_menu: bool,
    #[serde(default = "default_true")]
    pub show_help_menu: bool,
    #[serde(default = "default_true")]
    pub show_select_language: bool,
    #[serde(default = "default_true")]
    pub show_compiler_options: bool,
    #[serde(default = "default_true")]
    pub show_command_line_arguments: bool,
    #[serde(default = "default_true")]
    pub show_run_button: bool,
    #[serde(default = "default_true")]
    pub show_theme_button: bool,
    #[serde(default = "default_true")]
    pub show_puter_sign_in_out_button: bool,
    #[serde(default = "default_true")]
    pub show_status_line: bool,
    #[serde(default = "default_true")]
    pub show_copyright: bool,
    #[serde(default = "default_true")]
    pub show_navigation: bool,
}

/// Application options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppOptions {
    /// Show the AI assistant panel
    #[serde(default = "default_true", rename = "showAIAssistant")]
    pub show_ai_assistant: bool,

    /// Arrangement of the input and output panes
    #[serde(default)]
    pub io_layout: Layout,

    /// Arrangement of the assistant panel
    #[serde(default = "default_assistant_layout")]
    pub assistant_layout: Layout,

    /// Arrangement of the editor against the side panels
    ///
    /// Free-form: the renderer interprets it, no value is rejected.
    #[serde(default = "default_main_layout")]
    pub main_layout: String,

    #[serde(default = "default_true")]
    pub show_input: bool,

    #[serde(default = "default_true")]
    pub show_output: bool,

    /// Key for the execution API
    #[serde(default)]
    pub api_key: String,
}

/// Color theme selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Follow the operating system preference
    #[default]
    System,
    /// The opposite of the operating system preference
    ReverseSystem,
    Light,
    Dark,
}

/// Named style preset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    Default,
    Minimal,
    Standalone,
    Electron,
    Puter,
}

/// Pane arrangement
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Stack,
    Row,
    Column,
}

/// Error returned when a string names no variant of an enumerated setting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::System,
        Theme::ReverseSystem,
        Theme::Light,
        Theme::Dark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::ReverseSystem => "reverse-system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Default,
        Style::Minimal,
        Style::Standalone,
        Style::Electron,
        Style::Puter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Minimal => "minimal",
            Style::Standalone => "standalone",
            Style::Electron => "electron",
            Style::Puter => "puter",
        }
    }
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Stack, Layout::Row, Layout::Column];

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Stack => "stack",
            Layout::Row => "row",
            Layout::Column => "column",
        }
    }
}

macro_rules! impl_name_conversions {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_name_conversions!(Theme, "theme");
impl_name_conversions!(Style, "style");
impl_name_conversions!(Layout, "layout");

// Default value functions
fn default_true() -> bool {
    true
}

fn default_assistant_layout() -> Layout {
    Layout::Column
}

fn default_main_layout() -> String {
    "row".to_string()
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            style: Style::default(),
            style_options: StyleOptions::default(),
            app_options: AppOptions::default(),
        }
    }
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            show_logo: true,
            show_file_menu: true,
            show_help_menu: true,
            show_select_language: true,
            show_compiler_options: true,
            show_command_line_arguments: true,
            show_run_button: true,
            show_theme_button: true,
            show_puter_sign_in_out_button: true,
            show_status_line: true,
            show_copyright: true,
            show_navigation: true,
        }
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            show_ai_assistant: true,
            io_layout: Layout::Stack,
            assistant_layout: default_assistant_layout(),
            main_layout: default_main_layout(),
            show_input: true,
            show_output: true,
            api_key: String::new(),
        }
    }
}
