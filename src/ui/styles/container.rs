// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface behind the whole selector.
///
/// Derived from the active Iced `Theme` background so it stays readable in
/// both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Row background, highlighted while the pointer is over the row.
pub fn row(hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let background = if hovered {
            let weak = theme.extended_palette().background.weak.color;
            Color {
                a: opacity::ROW_HOVER,
                ..weak
            }
        } else {
            Color::TRANSPARENT
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
