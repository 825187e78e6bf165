// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`checkbox_glyph`] - Canvas-drawn checkbox square with checkmark and
//!   hover/press emphasis

pub mod checkbox_glyph;
