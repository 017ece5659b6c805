//! Palette for the photo browser
//!
//! Styles are named after the part of the screen they decorate, so widgets
//! never pick raw colors.

use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    /// Focused panel borders, the list cursor and key hints
    pub accent: Color,
    /// Labels, placeholders and unfocused borders
    pub muted: Color,
    /// Background of the row under the cursor
    pub cursor_bg: Color,
    pub author: Color,
    pub likes: Color,
    /// Work in progress: loading text, result counts, the selected marker
    pub pending: Color,
    pub success: Color,
    pub warning: Color,
    pub failure: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::LightBlue,
            muted: Color::DarkGray,
            cursor_bg: Color::Indexed(237),
            author: Color::LightMagenta,
            likes: Color::LightRed,
            pending: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            failure: Color::Red,
        }
    }

    #[must_use]
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            self.muted()
        }
    }

    /// Row under the list cursor
    #[must_use]
    pub fn cursor_row(&self) -> Style {
        Style::default().bg(self.cursor_bg).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn author(&self) -> Style {
        Style::default().fg(self.author)
    }

    #[must_use]
    pub fn likes(&self) -> Style {
        Style::default().fg(self.likes)
    }

    #[must_use]
    pub fn pending(&self) -> Style {
        Style::default().fg(self.pending)
    }

    /// Value of a filter chip in the filter bar
    #[must_use]
    pub fn filter(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.warning).add_modifier(Modifier::BOLD)
        } else {
            self.muted()
        }
    }

    /// Status bar text for a message of `level`
    #[must_use]
    pub fn level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => Style::default().fg(self.success),
            MessageLevel::Error => Style::default().fg(self.failure),
            MessageLevel::Warning => Style::default().fg(self.warning),
            MessageLevel::Info => self.pending(),
            MessageLevel::Normal => Style::default(),
        }
    }

    /// Swatch in a photo's dominant color, given as `#rrggbb`
    #[must_use]
    pub fn swatch(hex: &str) -> Option<Style> {
        if hex.len() != 7 || !hex.starts_with('#') {
            return None;
        }
        hex.parse::<Color>().ok().map(|color| Style::default().fg(color))
    }
}
