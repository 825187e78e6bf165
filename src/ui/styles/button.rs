// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (the Done button).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => palette::ACCENT,
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_LIGHT,
        button::Status::Disabled => palette::GRAY_200,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_accent_colors() {
        let theme = Theme::Light;

        let active = primary(&theme, button::Status::Active);
        let hovered = primary(&theme, button::Status::Hovered);

        assert_eq!(active.background, Some(Background::Color(palette::ACCENT)));
        assert_eq!(
            hovered.background,
            Some(Background::Color(palette::ACCENT_LIGHT))
        );
        assert_eq!(active.text_color, WHITE);
    }
}
