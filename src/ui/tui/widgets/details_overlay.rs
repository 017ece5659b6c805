//! Details overlay widget
//!
//! Draws the selected photo's record in a centered panel that slides up
//! from the bottom edge while entering and back down while exiting.

use crate::catalog::{Photo, PhotoDetails};
use crate::commands::details::format_details;
use crate::overlay::{OverlayPhase, TransitionKind};
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// How much of the panel is on screen, from 0.0 (off) to 1.0 (in place)
#[must_use]
pub fn slide_fraction(phase: OverlayPhase, progress: Option<(TransitionKind, f64)>) -> f64 {
    match (phase, progress) {
        (OverlayPhase::Hidden, _) => 0.0,
        (OverlayPhase::Visible, _) => 1.0,
        (OverlayPhase::Entering, Some((TransitionKind::Enter, p))) => p,
        (OverlayPhase::Exiting, Some((TransitionKind::Exit, p))) => 1.0 - p,
        (OverlayPhase::Entering, _) => 1.0,
        (OverlayPhase::Exiting, _) => 0.0,
    }
}

/// Calculate a centered area taking the given percentages of `area`
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height.min(90)) / 2),
        Constraint::Percentage(height.min(90)),
        Constraint::Percentage((100 - height.min(90)) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width.min(90)) / 2),
        Constraint::Percentage(width.min(90)),
        Constraint::Percentage((100 - width.min(90)) / 2),
    ])
    .split(popup_layout[1])[1]
}

pub struct DetailsOverlay<'a> {
    photo: &'a Photo,
    details: Option<&'a PhotoDetails>,
    fraction: f64,
    theme: &'a Theme,
}

impl<'a> DetailsOverlay<'a> {
    #[must_use]
    pub const fn new(photo: &'a Photo, details: Option<&'a PhotoDetails>, theme: &'a Theme) -> Self {
        Self {
            photo,
            details,
            fraction: 1.0,
            theme,
        }
    }

    #[must_use]
    pub const fn fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    /// Panel position for the current slide fraction
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn slid_rect(&self, area: Rect) -> Rect {
        let popup = centered_rect(70, 70, area);
        let travel = f64::from(area.bottom().saturating_sub(popup.y));
        let offset = ((1.0 - self.fraction.clamp(0.0, 1.0)) * travel).round() as u16;
        let y = popup.y.saturating_add(offset);
        Rect {
            y,
            height: popup.height.min(area.bottom().saturating_sub(y)),
            ..popup
        }
    }

    fn build_content(&self) -> Vec<Line<'a>> {
        let rows = match self.details {
            Some(details) => format_details(details),
            None => format_details(&PhotoDetails::from(self.photo.clone())),
        };

        let mut lines: Vec<Line<'a>> = rows
            .into_iter()
            .map(|(label, value)| {
                let mut spans = vec![Span::styled(format!("{label:<12}"), self.theme.muted())];
                let swatch = if label == "Color" { Theme::swatch(&value) } else { None };
                if let Some(style) = swatch {
                    spans.push(Span::styled("■ ", style));
                }
                spans.push(Span::raw(value));
                Line::from(spans)
            })
            .collect();

        if self.details.is_none() {
            lines.push(Line::raw(""));
            lines.push(Line::styled("Loading details…", self.theme.pending()));
        }
        lines
    }
}

impl Widget for DetailsOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = self.slid_rect(area);
        if panel.height < 3 {
            return;
        }

        Clear.render(panel, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.panel_border(true))
            .title(format!(" {} ", self.photo.author_name))
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(panel, buf);
    }
}
