//! Status bar widget for displaying messages

use crate::overlay::OverlayPhase;
use crate::ui::output::{MessageLevel, StatusMessage};
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar with the latest message and the overlay phase
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    phase: OverlayPhase,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, phase: OverlayPhase, theme: &'a Theme) -> Self {
        Self {
            message,
            phase,
            theme,
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.panel_border(false))
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(80), Constraint::Percentage(20)])
            .split(inner);

        if let Some(msg) = self.message {
            let style = self.theme.level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        if self.phase.is_shown() {
            Paragraph::new(Line::styled(format!("[{}]", self.phase), self.theme.muted()))
                .alignment(Alignment::Right)
                .render(chunks[1], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tui::widgets::buffer_text;
    use std::time::Instant;

    #[test]
    fn test_shows_message_and_phase() {
        let theme = Theme::default();
        let message = StatusMessage {
            level: MessageLevel::Error,
            text: "Network error".into(),
            created_at: Instant::now(),
        };
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);

        StatusBar::new(Some(&message), OverlayPhase::Visible, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("✗ Network error"));
        assert!(text.contains("[visible]"));
    }

    #[test]
    fn test_hidden_phase_not_shown() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);

        StatusBar::new(None, OverlayPhase::Hidden, &theme).render(area, &mut buf);

        assert!(!buffer_text(&buf).contains("[hidden]"));
    }
}
