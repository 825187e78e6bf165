// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::confirm::ConfirmHandler;
use super::Message;
use crate::ui::page_selector::{self, Event as SelectorEvent};
use iced::Task;

/// Mutable application state needed to process a message.
pub struct UpdateContext<'a> {
    pub selector: &'a mut page_selector::State,
    pub confirm_handler: &'a dyn ConfirmHandler,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Selector(selector_message) => handle_selector_message(ctx, selector_message),
    }
}

fn handle_selector_message(
    ctx: &mut UpdateContext<'_>,
    message: page_selector::Message,
) -> Task<Message> {
    match ctx.selector.update(message) {
        SelectorEvent::None => {}
        SelectorEvent::Confirmed(pages) => ctx.confirm_handler.confirm(&pages),
    }
    Task::none()
}
