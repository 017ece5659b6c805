//! Search bar widget for the search term

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar that shows the typed term with a trailing cursor
pub struct SearchBar<'a> {
    input: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(input: &'a str, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.panel_border(self.focused))
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(">", self.theme.muted()), Span::raw(" ")];
        if self.input.is_empty() && !self.focused {
            spans.push(Span::styled("press / to search", self.theme.muted()));
        } else {
            spans.push(Span::raw(self.input));
        }
        if self.focused {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
