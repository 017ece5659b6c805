//! Widgets for the terminal browser

mod details_overlay;
mod filter_bar;
mod help_bar;
mod photo_list;
mod search_bar;
mod status_bar;

pub use details_overlay::{DetailsOverlay, centered_rect, slide_fraction};
pub use filter_bar::FilterBar;
pub use help_bar::{HelpBar, KeyHint};
pub use photo_list::PhotoList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
