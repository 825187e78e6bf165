// SPDX-License-Identifier: MPL-2.0
//! A selectable row: text label on the left, checkbox glyph on the right.
//!
//! The row tracks pointer hover and press to tint the glyph, and turns a
//! press followed by a release inside its bounds into a single activation.
//! The pointer may leave and re-enter between the two; the owning container
//! disarms every row when a new press starts elsewhere.
//! It never owns the checked value; the container passes it in and decides
//! what an activation means.

use crate::ui::components::checkbox_glyph::CheckboxGlyph;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{mouse_area, Container, Row, Text};
use iced::{alignment::Vertical, mouse, Element, Length};

/// Pointer activity routed to one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Entered,
    Exited,
    Pressed,
    Released,
}

/// Outcome of a row message for the owning container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The row was clicked; the container should toggle its checked value.
    Activated,
}

/// Transient hover/press flags of a single row.
///
/// `pressed` drives the glyph tint and is dropped when the pointer leaves.
/// `armed` remembers that the current press began on this row, so a release
/// after leaving and re-entering still counts as a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowInteraction {
    hovered: bool,
    pressed: bool,
    armed: bool,
}

impl RowInteraction {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Entered => {
                self.hovered = true;
                Event::None
            }
            Message::Exited => {
                // `armed` survives so a re-entry can still complete the click
                self.hovered = false;
                self.pressed = false;
                Event::None
            }
            Message::Pressed => {
                self.pressed = true;
                self.armed = true;
                Event::None
            }
            Message::Released => {
                let was_armed = self.armed;
                self.pressed = false;
                self.armed = false;
                if was_armed {
                    Event::Activated
                } else {
                    Event::None
                }
            }
        }
    }

    /// Forgets a press that started on this row.
    pub fn disarm(&mut self) {
        self.pressed = false;
        self.armed = false;
    }

    #[must_use]
    pub fn armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Glyph for this row. Hover and press only reach the glyph when checked.
    #[must_use]
    pub fn glyph(&self, checked: bool) -> CheckboxGlyph {
        CheckboxGlyph::new(checked)
            .hovered(self.hovered && checked)
            .pressed(self.pressed && checked)
    }
}

/// Contextual data needed to render a row.
pub struct ViewContext<'a> {
    pub label: &'a str,
    pub checked: bool,
    pub interaction: RowInteraction,
}

/// Render a row. The whole row surface is clickable, not only the glyph.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.label)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let content = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::SM)
        .push(label)
        .push(ctx.interaction.glyph(ctx.checked).view());

    let surface = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ROW_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .style(styles::container::row(ctx.interaction.hovered()));

    mouse_area(surface)
        .on_enter(Message::Entered)
        .on_exit(Message::Exited)
        .on_press(Message::Pressed)
        .on_release(Message::Released)
        .interaction(mouse::Interaction::Pointer)
        .into()
}
