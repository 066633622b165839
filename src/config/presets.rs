//! Named style presets
//!
//! Each preset is a complete configuration tree. Switching the `style`
//! setting resets the option groups to the chosen preset.

use super::schema::{AppOptions, Configuration, Layout, Style, StyleOptions, Theme};

/// Build the full configuration for a preset
pub fn preset(style: Style) -> Configuration {
    let base = StyleOptions::default();

    let style_options = match style {
        Style::Default => base,
        Style::Minimal => StyleOptions {
            show_logo: false,
            show_file_menu: false,
            show_help_menu: false,
            show_compiler_options: false,
            show_command_line_arguments: false,
            show_theme_button: false,
            show_puter_sign_in_out_button: false,
            show_status_line: false,
            show_copyright: false,
            ..base
        },
        Style::Standalone | Style::Electron => StyleOptions {
            show_logo: false,
            show_copyright: false,
            ..base
        },
        Style::Puter => StyleOptions {
            show_logo: false,
            ..base
        },
    };

    let app_options = match style {
        Style::Minimal => AppOptions {
            show_ai_assistant: false,
            io_layout: Layout::Column,
            ..AppOptions::default()
        },
        _ => AppOptions::default(),
    };

    Configuration {
        theme: Theme::System,
        style,
        style_options,
        app_options,
    }
}

/// Names of all presets, in declaration order
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    Style::ALL.into_iter().map(Style::as_str)
}
