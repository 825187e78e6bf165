// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Static design constants for the page selector.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Checkbox**: The checkbox glyph's fixed visual contract
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use page_selector::ui::design_tokens::{checkbox, spacing};

let glyph_size = checkbox::SIZE; // 25px square
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Vibrant blue used for checked glyphs and the Done button.
    pub const ACCENT: Color = Color::from_rgb8(0x00, 0x7A, 0xFF);
    /// Lighter blue for hovered or pressed checked glyphs.
    pub const ACCENT_LIGHT: Color = Color::from_rgb8(0x50, 0x87, 0xF8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Row highlight while hovered
    pub const ROW_HOVER: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Checkbox Glyph
// ============================================================================

pub mod checkbox {
    use super::{palette, Color};

    /// Side of the square viewbox.
    pub const SIZE: f32 = 25.0;
    /// The rectangle is inset by half the border so the stroke stays inside the viewbox.
    pub const RECT_INSET: f32 = 0.5;
    pub const RECT_SIZE: f32 = 24.0;
    pub const CORNER_RADIUS: f32 = 5.0;
    pub const BORDER_WIDTH: f32 = 1.0;

    pub const UNCHECKED_FILL: Color = palette::WHITE;
    pub const UNCHECKED_BORDER: Color = Color::from_rgb8(0xCD, 0xCD, 0xCD);
    pub const CHECKED: Color = palette::ACCENT;
    pub const CHECKED_EMPHASIZED: Color = palette::ACCENT_LIGHT;

    /// Checkmark polyline, lower-left through lower-middle to upper-right.
    pub const CHECKMARK: [(f32, f32); 3] = [(5.0, 13.0), (10.0, 17.0), (20.0, 7.0)];
    pub const CHECKMARK_COLOR: Color = palette::WHITE;
    pub const CHECKMARK_WIDTH: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ROW_HEIGHT: f32 = 44.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const DONE_BUTTON_WIDTH: f32 = 120.0;
    pub const SELECTOR_MAX_WIDTH: f32 = 360.0;
    pub const SEPARATOR: f32 = 1.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Row labels.
    pub const BODY_LG: f32 = 16.0;

    /// Button text.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(checkbox::RECT_INSET * 2.0 + checkbox::RECT_SIZE == checkbox::SIZE);
    assert!(checkbox::CORNER_RADIUS * 2.0 < checkbox::RECT_SIZE);
    assert!(sizing::ROW_HEIGHT > checkbox::SIZE);
    assert!(sizing::DONE_BUTTON_WIDTH + 2.0 * spacing::XS <= sizing::SELECTOR_MAX_WIDTH);

    assert!(typography::BODY_LG > typography::BODY);

    assert!(opacity::ROW_HOVER > opacity::TRANSPARENT && opacity::ROW_HOVER < opacity::OPAQUE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::SM * 2.0);
    }

    #[test]
    fn checkbox_colors_match_visual_contract() {
        assert_eq!(checkbox::CHECKED, Color::from_rgb8(0, 122, 255));
        assert_eq!(checkbox::CHECKED_EMPHASIZED, Color::from_rgb8(80, 135, 248));
        assert_eq!(checkbox::UNCHECKED_BORDER, Color::from_rgb8(205, 205, 205));
        assert_eq!(checkbox::UNCHECKED_FILL, Color::WHITE);
    }

    #[test]
    fn done_button_fits_label_and_panel() {
        // Horizontal button padding on both sides plus room for the label
        assert!(sizing::DONE_BUTTON_WIDTH > 2.0 * spacing::LG + typography::BODY);
        assert!(sizing::DONE_BUTTON_WIDTH < sizing::SELECTOR_MAX_WIDTH);
    }

    #[test]
    fn checkmark_stays_inside_glyph() {
        for (x, y) in checkbox::CHECKMARK {
            assert!(x > 0.0 && x < checkbox::SIZE);
            assert!(y > 0.0 && y < checkbox::SIZE);
        }
    }
}
