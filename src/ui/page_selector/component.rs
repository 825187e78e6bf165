// SPDX-License-Identifier: MPL-2.0
//! Page selector container: owns the selection and renders every row.
//!
//! Layout, top to bottom: the "All pages" row, a separator, one row per
//! [`PageId`], a separator, and the Done button.

use super::row::{self, RowInteraction};
use super::selection::{PageId, Selection};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::rule::horizontal as horizontal_rule;
use iced::widget::{button, mouse_area, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

pub const ALL_PAGES_LABEL: &str = "All pages";
pub const DONE_LABEL: &str = "Done";

/// Identifies a row of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowId {
    /// The aggregate "All pages" row.
    All,
    Page(PageId),
}

impl RowId {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RowId::All => ALL_PAGES_LABEL,
            RowId::Page(page) => page.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Row(RowId, row::Message),
    /// A press started somewhere other than a row.
    PointerPressed,
    /// The Done button was pressed.
    Confirm,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Done was pressed; carries the selected pages in declaration order.
    Confirmed(Vec<PageId>),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    selection: Selection,
    all_row: RowInteraction,
    page_rows: [RowInteraction; 4],
}

impl State {
    /// Fresh selector with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection snapshot.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn interaction(&self, row_id: RowId) -> RowInteraction {
        match row_id {
            RowId::All => self.all_row,
            RowId::Page(page) => self.page_rows[page.index()],
        }
    }

    fn interaction_mut(&mut self, row_id: RowId) -> &mut RowInteraction {
        match row_id {
            RowId::All => &mut self.all_row,
            RowId::Page(page) => &mut self.page_rows[page.index()],
        }
    }

    #[must_use]
    pub fn is_checked(&self, row_id: RowId) -> bool {
        match row_id {
            RowId::All => self.selection.all_selected(),
            RowId::Page(page) => self.selection.is_selected(page),
        }
    }

    pub fn set_all(&mut self, checked: bool) {
        self.selection.set_all(checked);
        tracing::debug!(checked, "all pages toggled");
    }

    pub fn set_one(&mut self, page: PageId, checked: bool) {
        self.selection.set_one(page, checked);
        tracing::debug!(
            page = page.as_str(),
            checked,
            all_selected = self.selection.all_selected(),
            "page toggled"
        );
    }

    /// Selected pages in declaration order.
    #[must_use]
    pub fn confirm(&self) -> Vec<PageId> {
        self.selection.selected()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Row(row_id, row_message) => {
                tracing::trace!(?row_id, ?row_message, "row pointer event");
                if row_message == row::Message::Pressed {
                    self.disarm_rows();
                }
                if self.interaction_mut(row_id).update(row_message) == row::Event::Activated {
                    self.activate(row_id);
                }
                Event::None
            }
            Message::PointerPressed => {
                self.disarm_rows();
                Event::None
            }
            Message::Confirm => Event::Confirmed(self.confirm()),
        }
    }

    /// Only the row a press started on may turn the next release into a click.
    fn disarm_rows(&mut self) {
        self.all_row.disarm();
        for interaction in &mut self.page_rows {
            interaction.disarm();
        }
    }

    /// Toggles the row's checked value.
    fn activate(&mut self, row_id: RowId) {
        let checked = !self.is_checked(row_id);
        match row_id {
            RowId::All => self.set_all(checked),
            RowId::Page(page) => self.set_one(page, checked),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut rows = Column::new()
            .width(Length::Fill)
            .spacing(spacing::XXS)
            .push(self.view_row(RowId::All))
            .push(horizontal_rule(sizing::SEPARATOR));

        for page in PageId::ALL {
            rows = rows.push(self.view_row(RowId::Page(page)));
        }

        let done_label = Container::new(Text::new(DONE_LABEL).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center);
        let done = button(done_label)
            .padding([spacing::XS, spacing::LG])
            .width(Length::Fixed(sizing::DONE_BUTTON_WIDTH))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::primary)
            .on_press(Message::Confirm);

        let content = rows
            .push(horizontal_rule(sizing::SEPARATOR))
            .push(
                Container::new(done)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center)
                    .padding([spacing::XS, 0.0]),
            );

        let panel = Container::new(content)
            .max_width(sizing::SELECTOR_MAX_WIDTH)
            .padding(spacing::XS)
            .style(styles::container::panel);

        // Rows and the Done button capture their own presses
        mouse_area(panel).on_press(Message::PointerPressed).into()
    }

    fn view_row(&self, row_id: RowId) -> Element<'_, Message> {
        row::view(row::ViewContext {
            label: row_id.label(),
            checked: self.is_checked(row_id),
            interaction: self.interaction(row_id),
        })
        .map(move |message| Message::Row(row_id, message))
    }
}
