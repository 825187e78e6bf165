// SPDX-License-Identifier: MPL-2.0
//! Page selector: an "All pages" master checkbox over four page checkboxes,
//! with a Done button.
//!
//! - [`selection`] - Selection state and the aggregate consistency rule
//! - [`row`] - Label + checkbox row with hover/press tracking
//! - [`component`] - Container wiring rows to the selection

pub mod component;
pub mod row;
pub mod selection;

pub use component::{Event, Message, RowId, State};
pub use selection::{PageId, Selection};
