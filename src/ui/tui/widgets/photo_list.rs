//! Photo list widget

use crate::catalog::Photo;
use crate::ui::output::MessageLevel;
use crate::ui::tui::app::ListFooter;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Result list with a cursor and a status footer
pub struct PhotoList<'a> {
    photos: &'a [Photo],
    cursor: usize,
    selected: Option<&'a str>,
    footer: ListFooter,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> PhotoList<'a> {
    #[must_use]
    pub const fn new(photos: &'a [Photo], cursor: usize, theme: &'a Theme) -> Self {
        Self {
            photos,
            cursor,
            selected: None,
            footer: ListFooter::None,
            theme,
            focused: false,
        }
    }

    /// Mark the photo shown in the overlay
    #[must_use]
    pub const fn selected(mut self, id: Option<&'a str>) -> Self {
        self.selected = id;
        self
    }

    #[must_use]
    pub const fn footer(mut self, footer: ListFooter) -> Self {
        self.footer = footer;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First visible row so the cursor stays on screen
    #[must_use]
    pub const fn scroll_offset(cursor: usize, height: usize) -> usize {
        if height == 0 {
            0
        } else {
            cursor.saturating_sub(height - 1)
        }
    }

    fn render_item(&self, photo: &'a Photo, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let marker = if self.selected == Some(photo.id.as_str()) { "●" } else { " " };
        let likes = photo.likes.map(|n| format!(" {n}♥")).unwrap_or_default();

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.accent()),
            Span::raw(" "),
            Span::styled(marker, self.theme.pending()),
            Span::raw(" "),
            Span::raw(photo.description_or_default()),
            Span::styled(format!("  {}", photo.author_name), self.theme.author()),
            Span::styled(likes, self.theme.likes()),
        ]);

        if is_cursor {
            ListItem::new(line).style(self.theme.cursor_row())
        } else {
            ListItem::new(line)
        }
    }

    fn footer_line(&self) -> Option<Line<'static>> {
        let (text, style) = match self.footer {
            ListFooter::Prompt => ("Type a term and press Enter", self.theme.muted()),
            ListFooter::Loading => ("Loading…", self.theme.pending()),
            ListFooter::End if self.photos.is_empty() => ("No photos found", self.theme.level(MessageLevel::Warning)),
            ListFooter::End => ("End of results", self.theme.muted()),
            ListFooter::Capped => ("Result limit reached", self.theme.level(MessageLevel::Warning)),
            ListFooter::None => return None,
        };
        Some(Line::styled(text, style))
    }
}

impl Widget for PhotoList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.panel_border(self.focused))
            .title(format!(" Photos ({}) ", self.photos.len()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let footer = self.footer_line();
        let list_height = inner.height as usize - usize::from(footer.is_some());
        let start = Self::scroll_offset(self.cursor, list_height);
        let end = (start + list_height).min(self.photos.len());

        let mut items: Vec<ListItem> = self.photos[start..end]
            .iter()
            .enumerate()
            .map(|(offset, photo)| self.render_item(photo, start + offset == self.cursor))
            .collect();
        if let Some(line) = footer {
            items.push(ListItem::new(line));
        }

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tui::widgets::buffer_text;

    fn photos(n: usize) -> Vec<Photo> {
        (0..n)
            .map(|i| Photo::new(format!("p{i}"), "t", "Ada").with_description(format!("photo {i}")))
            .collect()
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        assert_eq!(PhotoList::scroll_offset(0, 10), 0);
        assert_eq!(PhotoList::scroll_offset(9, 10), 0);
        assert_eq!(PhotoList::scroll_offset(15, 10), 6);
        assert_eq!(PhotoList::scroll_offset(3, 0), 0);
    }

    #[test]
    fn test_renders_rows_and_footer() {
        let theme = Theme::default();
        let photos = photos(3);
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);

        PhotoList::new(&photos, 1, &theme)
            .selected(Some("p2"))
            .footer(ListFooter::Loading)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Photos (3)"));
        assert!(text.contains(">   photo 1"));
        assert!(text.contains("  ● photo 2"));
        assert!(text.contains("Loading…"));
    }

    #[test]
    fn test_empty_end_reads_no_photos() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        PhotoList::new(&[], 0, &theme)
            .footer(ListFooter::End)
            .render(area, &mut buf);

        assert!(buffer_text(&buf).contains("No photos found"));
    }
}
