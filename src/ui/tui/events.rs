//! Event handling for the terminal browser
//!
//! Maps key presses onto [`App`] operations. Three contexts are checked in
//! order: the open overlay, the search bar, then the photo list.

use super::app::{App, Focus, PAGE_STEP};
use crate::ui::error::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the browser
    Quit,
    /// No action taken
    Ignored,
}

/// Wait up to `timeout` for a key press
///
/// # Errors
/// Returns an error if the terminal cannot be read.
pub fn poll_key(timeout: Duration) -> Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Dispatch one key press
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return EventResult::Quit;
    }

    if app.overlay_open() {
        return handle_overlay(app, key, now);
    }

    match app.focus() {
        Focus::Search => handle_search_bar(app, key, now),
        Focus::List => handle_list(app, key, now),
    }
}

fn handle_overlay(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_overlay(now),
        KeyCode::Down | KeyCode::Char('j') => app.step_selection(1, now),
        KeyCode::Up | KeyCode::Char('k') => app.step_selection(-1, now),
        KeyCode::Char('d') => app.download_selected(),
        KeyCode::Char('y') => app.copy_selected_url(),
        KeyCode::Char('o') => app.open_selected(),
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

fn handle_search_bar(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => app.submit_input(now),
        (KeyCode::Esc | KeyCode::Tab | KeyCode::Down, _) => app.set_focus(Focus::List),
        (KeyCode::Backspace, _) => app.pop_char(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => app.push_char(c),
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

#[allow(clippy::cast_possible_wrap)]
fn handle_list(app: &mut App, key: KeyEvent, now: Instant) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.quit();
            return EventResult::Quit;
        }
        KeyCode::Char('/') | KeyCode::Tab => app.set_focus(Focus::Search),

        // Navigation
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::PageDown => app.move_cursor(PAGE_STEP as isize),
        KeyCode::PageUp => app.move_cursor(-(PAGE_STEP as isize)),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_start(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_end(),

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => app.select_current(now),

        // Filters
        KeyCode::Char('o') => app.cycle_orientation(now),
        KeyCode::Char('c') => app.cycle_color(now),
        KeyCode::Char('p') => app.toggle_popular(now),
        KeyCode::Char('r') => app.request_more(),

        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}
