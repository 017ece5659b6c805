//! Help bar widget for displaying keybind hints

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "j/k")
    pub key: &'static str,
    /// Action description (e.g., "select", "download")
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints while typing a search term
    #[must_use]
    pub const fn search_hints() -> &'static [KeyHint] {
        const {
            &[
                KeyHint::new("Enter", "search"),
                KeyHint::new("Tab", "results"),
                KeyHint::new("Ctrl-C", "quit"),
            ]
        }
    }

    /// Hints while moving through the results
    #[must_use]
    pub const fn list_hints() -> &'static [KeyHint] {
        const {
            &[
                KeyHint::new("j/k", "move"),
                KeyHint::new("Enter", "details"),
                KeyHint::new("/", "search"),
                KeyHint::new("o", "orientation"),
                KeyHint::new("c", "color"),
                KeyHint::new("p", "popular"),
                KeyHint::new("q", "quit"),
            ]
        }
    }

    /// Hints while the details overlay is open
    #[must_use]
    pub const fn overlay_hints() -> &'static [KeyHint] {
        const {
            &[
                KeyHint::new("j/k", "next/prev"),
                KeyHint::new("d", "download"),
                KeyHint::new("y", "copy url"),
                KeyHint::new("o", "open"),
                KeyHint::new("Esc", "close"),
            ]
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(hint.key, self.theme.accent()));
            spans.push(Span::styled(":", self.theme.muted()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
