// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 360;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 420;

/// Smallest window that still fits every row and the Done button.
pub const MIN_WINDOW_WIDTH: u32 = 240;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

pub const MAX_WINDOW_WIDTH: u32 = 3840;
pub const MAX_WINDOW_HEIGHT: u32 = 2160;

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_WIDTH <= MAX_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);
    assert!(DEFAULT_WINDOW_HEIGHT <= MAX_WINDOW_HEIGHT);
};
