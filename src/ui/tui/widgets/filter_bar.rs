//! Filter bar widget: active filters on the left, result counts on the right

use crate::search::{SearchQuery, SearchSession};
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FilterBar<'a> {
    query: &'a SearchQuery,
    session: Option<&'a SearchSession>,
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    #[must_use]
    pub const fn new(
        query: &'a SearchQuery,
        session: Option<&'a SearchSession>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            query,
            session,
            theme,
        }
    }

    fn filter_span(&self, label: &'static str, value: String, active: bool) -> Vec<Span<'static>> {
        vec![
            Span::styled(label, self.theme.muted()),
            Span::styled(value, self.theme.filter(active)),
            Span::raw("  "),
        ]
    }

    fn counts(&self) -> String {
        match self.session {
            Some(session) => format!(
                "{} of {} · page {}",
                session.len(),
                session.total_available(),
                session.pages_loaded()
            ),
            None => String::new(),
        }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(28)])
            .split(area);

        let color = self
            .query
            .color
            .map_or_else(|| "any".to_string(), |c| c.to_string());
        let mut spans = Vec::new();
        spans.extend(self.filter_span(
            "[o]rientation ",
            self.query.orientation.to_string(),
            self.query.orientation.as_param().is_some(),
        ));
        spans.extend(self.filter_span("[c]olor ", color, self.query.color.is_some()));
        spans.extend(self.filter_span(
            "[p]opular ",
            if self.query.popular_only { "on" } else { "off" }.to_string(),
            self.query.popular_only,
        ));
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        Paragraph::new(Line::styled(self.counts(), self.theme.pending()))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
