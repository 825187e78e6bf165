// SPDX-License-Identifier: MPL-2.0
//! `page_selector` is a small page picker built with the Iced GUI framework.
//!
//! It shows an "All pages" master checkbox above four individually selectable
//! pages and a "Done" button that hands the selected pages to a
//! [`ConfirmHandler`](app::ConfirmHandler).

pub mod app;
pub mod error;
pub mod logging;
pub mod ui;

pub use app::config;
pub use ui::page_selector::{PageId, Selection};
