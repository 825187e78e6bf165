// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::design_tokens::spacing;
use crate::ui::page_selector;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{mouse_area, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub selector: &'a page_selector::State,
}

/// Renders the selector centered in the window.
///
/// A press on the window background disarms the rows like a press on the
/// panel does.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let centered = Container::new(ctx.selector.view().map(Message::Selector))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG);

    mouse_area(centered)
        .on_press(Message::Selector(page_selector::Message::PointerPressed))
        .into()
}
