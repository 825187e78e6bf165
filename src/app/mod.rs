// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the page selector and the confirmation handler, and
//! translates selector events into handler calls. Configuration is read once
//! at startup; the selection itself always starts empty.

pub mod config;
pub mod confirm;
mod message;
pub mod paths;
mod update;
mod view;

pub use confirm::{ConfirmHandler, LogConfirmation, PrintConfirmation};
pub use message::{Flags, Message};

use crate::ui::page_selector;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const APP_NAME: &str = "Page Selector";

/// Root Iced application state.
pub struct App {
    selector: page_selector::State,
    theme_mode: ThemeMode,
    confirm_handler: Box<dyn ConfirmHandler>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selection", &self.selector.selection())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            selector: page_selector::State::new(),
            theme_mode: ThemeMode::System,
            confirm_handler: Box::new(LogConfirmation),
        }
    }
}

/// Builds the window settings from the `[window]` config section.
pub fn window_settings(config: &config::WindowConfig) -> window::Settings {
    let (width, height) = config.size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Confirmed selections are logged, or printed to stdout when
/// `flags.print_selection` is set.
pub fn run(flags: Flags) -> iced::Result {
    let handler: Box<dyn ConfirmHandler> = if flags.print_selection {
        Box::new(PrintConfirmation)
    } else {
        Box::new(LogConfirmation)
    };
    run_with_handler(flags, handler)
}

/// Launches the application with a caller-supplied confirmation handler.
pub fn run_with_handler(flags: Flags, handler: Box<dyn ConfirmHandler>) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir);
    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}, using defaults");
    }

    if flags.save_theme {
        if let Some(theme_mode) = flags.theme {
            match config::save_theme_mode(theme_mode) {
                Ok(_) => tracing::info!(?theme_mode, "theme mode saved"),
                Err(err) => tracing::warn!("failed to save theme mode: {err}"),
            }
        }
    }

    let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
    let window = window_settings(&config.window);
    tracing::info!(?theme_mode, "starting page selector");

    // iced requires an `Fn` boot function; the handler is moved out on first call
    let boot_state = RefCell::new(Some(handler));
    let boot = move || {
        let handler = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Box::new(LogConfirmation));
        App::new(theme_mode, handler)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .run()
}

impl App {
    /// Creates the application with a fresh, empty selection.
    pub fn new(
        theme_mode: ThemeMode,
        confirm_handler: Box<dyn ConfirmHandler>,
    ) -> (Self, Task<Message>) {
        let app = App {
            selector: page_selector::State::new(),
            theme_mode,
            confirm_handler,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        let selected = self.selector.confirm().len();
        if selected == 0 {
            APP_NAME.to_string()
        } else {
            format!("{APP_NAME} ({selected} selected)")
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            selector: &mut self.selector,
            confirm_handler: self.confirm_handler.as_ref(),
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            selector: &self.selector,
        })
    }
}
