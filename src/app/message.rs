// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::page_selector;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Selector(page_selector::Message),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PAGE_SELECTOR_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional theme override for this session.
    pub theme: Option<ThemeMode>,
    /// Persist `theme` to settings.toml before launching.
    pub save_theme: bool,
    /// Print confirmed page identifiers to stdout instead of logging them.
    pub print_selection: bool,
}
