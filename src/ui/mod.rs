// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`page_selector`] - The page selector screen and its selection state
//! - [`components`] - Reusable UI components (checkbox glyph)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod page_selector;
pub mod styles;
pub mod theming;
