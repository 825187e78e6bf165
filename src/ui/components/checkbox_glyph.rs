// SPDX-License-Identifier: MPL-2.0
//! Rounded-square checkbox glyph drawn on a canvas.
//!
//! The glyph has no state of its own. Its look is a pure function of the
//! `(checked, hovered, pressed)` flags it is built with, resolved through
//! [`GlyphStyle::resolve`].

use crate::ui::design_tokens::checkbox;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// One of the three visual appearances of the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphStyle {
    /// White square with a light-gray border, no checkmark.
    Unchecked,
    /// Checked, default accent blue.
    Accent,
    /// Checked while hovered or pressed, lighter blue.
    Emphasized,
}

impl GlyphStyle {
    /// Picks the style for the given flags. First match wins:
    /// unchecked, then checked with hover or press, then plain checked.
    #[must_use]
    pub fn resolve(checked: bool, hovered: bool, pressed: bool) -> Self {
        if !checked {
            GlyphStyle::Unchecked
        } else if hovered || pressed {
            GlyphStyle::Emphasized
        } else {
            GlyphStyle::Accent
        }
    }

    #[must_use]
    pub fn fill(self) -> Color {
        match self {
            GlyphStyle::Unchecked => checkbox::UNCHECKED_FILL,
            GlyphStyle::Accent => checkbox::CHECKED,
            GlyphStyle::Emphasized => checkbox::CHECKED_EMPHASIZED,
        }
    }

    #[must_use]
    pub fn border(self) -> Color {
        match self {
            GlyphStyle::Unchecked => checkbox::UNCHECKED_BORDER,
            GlyphStyle::Accent => checkbox::CHECKED,
            GlyphStyle::Emphasized => checkbox::CHECKED_EMPHASIZED,
        }
    }

    /// The checkmark is drawn iff the glyph is checked.
    #[must_use]
    pub fn has_checkmark(self) -> bool {
        !matches!(self, GlyphStyle::Unchecked)
    }
}

/// Fixed-size checkbox glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckboxGlyph {
    checked: bool,
    hovered: bool,
    pressed: bool,
}

impl CheckboxGlyph {
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    #[must_use]
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    #[must_use]
    pub fn style(&self) -> GlyphStyle {
        GlyphStyle::resolve(self.checked, self.hovered, self.pressed)
    }

    /// Wraps the glyph in a fixed-size canvas.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(checkbox::SIZE))
            .height(Length::Fixed(checkbox::SIZE))
            .into()
    }
}

fn checkmark_path() -> Path {
    let mut builder = canvas::path::Builder::new();
    let [start, middle, end] = checkbox::CHECKMARK;
    builder.move_to(Point::new(start.0, start.1));
    builder.line_to(Point::new(middle.0, middle.1));
    builder.line_to(Point::new(end.0, end.1));
    builder.build()
}

impl<Message> canvas::Program<Message> for CheckboxGlyph {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let style = self.style();

        let square = Path::rounded_rectangle(
            Point::new(checkbox::RECT_INSET, checkbox::RECT_INSET),
            Size::new(checkbox::RECT_SIZE, checkbox::RECT_SIZE),
            checkbox::CORNER_RADIUS.into(),
        );
        frame.fill(&square, style.fill());
        frame.stroke(
            &square,
            Stroke::default()
                .with_width(checkbox::BORDER_WIDTH)
                .with_color(style.border()),
        );

        if style.has_checkmark() {
            frame.stroke(
                &checkmark_path(),
                Stroke::default()
                    .with_width(checkbox::CHECKMARK_WIDTH)
                    .with_color(checkbox::CHECKMARK_COLOR)
                    .with_line_cap(LineCap::Round)
                    .with_line_join(LineJoin::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}
