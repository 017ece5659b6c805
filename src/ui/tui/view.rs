//! Frame layout for the terminal browser

use super::app::{App, Focus};
use super::theme::Theme;
use super::widgets::{
    DetailsOverlay, FilterBar, HelpBar, PhotoList, SearchBar, StatusBar, slide_fraction,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use std::time::Instant;

/// Draw the whole browser for the state at `now`
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, now: Instant) {
    let area = frame.area();
    let controller = app.controller();
    let overlay = app.overlay();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Filters
            Constraint::Min(5),    // Results
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let search_focused = app.focus() == Focus::Search && !app.overlay_open();
    frame.render_widget(
        SearchBar::new(app.input(), theme).focused(search_focused),
        layout[0],
    );
    frame.render_widget(
        FilterBar::new(controller.query(), controller.session(), theme),
        layout[1],
    );
    frame.render_widget(
        PhotoList::new(controller.photos(), app.cursor(), theme)
            .selected(overlay.selected_id())
            .footer(app.list_footer())
            .focused(app.focus() == Focus::List),
        layout[2],
    );

    let message = app.status().latest();
    frame.render_widget(
        StatusBar::new(message.as_ref(), overlay.phase(), theme),
        layout[3],
    );

    let hints = if app.overlay_open() {
        HelpBar::overlay_hints()
    } else if app.focus() == Focus::Search {
        HelpBar::search_hints()
    } else {
        HelpBar::list_hints()
    };
    frame.render_widget(HelpBar::new(hints, theme), layout[4]);

    if let Some(photo) = app.selected_photo() {
        let fraction = slide_fraction(overlay.phase(), app.transition_progress(now));
        frame.render_widget(
            DetailsOverlay::new(photo, app.selected_details(), theme).fraction(fraction),
            layout[2],
        );
    }
}
