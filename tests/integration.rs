// SPDX-License-Identifier: MPL-2.0
use page_selector::config::{self, Config};
use page_selector::ui::components::checkbox_glyph::GlyphStyle;
use page_selector::ui::page_selector::{row, Event, Message, PageId, RowId, State};
use page_selector::ui::theming::ThemeMode;
use tempfile::tempdir;

fn pointer(state: &mut State, target: RowId, message: row::Message) -> Event {
    state.update(Message::Row(target, message))
}

fn click(state: &mut State, target: RowId) {
    pointer(state, target, row::Message::Entered);
    pointer(state, target, row::Message::Pressed);
    pointer(state, target, row::Message::Released);
}

#[test]
fn selecting_pages_one_by_one_then_confirming() {
    let mut state = State::new();

    click(&mut state, RowId::Page(PageId::Page1));
    click(&mut state, RowId::Page(PageId::Page3));

    assert!(!state.selection().all_selected());
    assert_eq!(
        state.update(Message::Confirm),
        Event::Confirmed(vec![PageId::Page1, PageId::Page3])
    );
}

#[test]
fn all_pages_row_drives_every_page() {
    let mut state = State::new();

    click(&mut state, RowId::All);
    for page in PageId::ALL {
        assert!(state.is_checked(RowId::Page(page)));
    }

    // Unchecking one page clears the aggregate but keeps the rest
    click(&mut state, RowId::Page(PageId::Page2));
    assert!(!state.is_checked(RowId::All));
    assert_eq!(
        state.confirm(),
        vec![PageId::Page1, PageId::Page3, PageId::Page4]
    );

    // Rechecking it restores the aggregate
    click(&mut state, RowId::Page(PageId::Page2));
    assert!(state.is_checked(RowId::All));

    click(&mut state, RowId::All);
    assert!(state.confirm().is_empty());
}

#[test]
fn dragging_off_a_checked_row_resets_its_glyph() {
    let mut state = State::new();
    let target = RowId::Page(PageId::Page4);
    click(&mut state, target);
    assert!(state.is_checked(target));

    pointer(&mut state, target, row::Message::Pressed);
    let pressed = state.interaction(target).glyph(true).style();
    assert_eq!(pressed, GlyphStyle::Emphasized);

    pointer(&mut state, target, row::Message::Exited);
    let interaction = state.interaction(target);
    assert!(!interaction.hovered());
    assert!(!interaction.pressed());
    assert_eq!(interaction.glyph(true).style(), GlyphStyle::Accent);
    assert!(state.is_checked(target));
}

#[test]
fn click_survives_leaving_and_returning_to_the_row() {
    let mut state = State::new();
    let target = RowId::All;
    pointer(&mut state, target, row::Message::Entered);
    pointer(&mut state, target, row::Message::Pressed);
    pointer(&mut state, target, row::Message::Exited);
    pointer(&mut state, RowId::Page(PageId::Page1), row::Message::Entered);
    pointer(&mut state, RowId::Page(PageId::Page1), row::Message::Exited);
    pointer(&mut state, target, row::Message::Entered);
    pointer(&mut state, target, row::Message::Released);

    assert!(state.selection().all_selected());
}

#[test]
fn release_on_row_after_press_on_background_is_ignored() {
    let mut state = State::new();
    let target = RowId::Page(PageId::Page2);

    state.update(Message::PointerPressed);
    pointer(&mut state, target, row::Message::Entered);
    pointer(&mut state, target, row::Message::Released);

    assert!(!state.is_checked(target));
}

#[test]
fn saving_theme_keeps_hand_edited_window_size() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.window.height = Some(700);
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    config::save_theme_mode_with_override(ThemeMode::Light, Some(dir.path().to_path_buf()))
        .expect("Failed to save theme");
    let (loaded, _warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.window.height, Some(700));
}

#[test]
fn config_round_trip_through_directory_override() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.window.width = Some(400);

    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, config);
}
