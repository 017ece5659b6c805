//! Selection overlay state machine
//!
//! ```text
//!            select(id)                complete(enter)
//!  Hidden ───────────────▶ Entering ───────────────────▶ Visible
//!    ▲                      │    ▲                          │
//!    │ complete(exit)       │    │ select(id)               │ close()
//!    │                close()    │                          ▼
//!    └────────────────────── Exiting ◀──────────────────────┘
//! ```
//!
//! Every transition carries a [`TransitionId`]. Completion events for any
//! id other than the transition currently in progress are ignored, so a late
//! enter completion can never land after an exit has started.

use crate::catalog::Photo;
use std::fmt;

/// Phase of the detail overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    #[default]
    Hidden,
    Entering,
    Visible,
    Exiting,
}

impl OverlayPhase {
    /// Whether the overlay occupies the screen in this phase
    #[must_use]
    pub const fn is_shown(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }
}

impl fmt::Display for OverlayPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hidden => "hidden",
            Self::Entering => "entering",
            Self::Visible => "visible",
            Self::Exiting => "exiting",
        };
        f.write_str(name)
    }
}

/// Identifier of one started transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Enter,
    Exit,
}

/// Returned when an operation starts a timed transition
///
/// The owner must schedule a completion for `id` after the duration that
/// belongs to `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionStarted {
    pub id: TransitionId,
    pub kind: TransitionKind,
}

/// Detail overlay for a single selected photo
///
/// Holds the selected photo by id only; the photo itself lives in the
/// search results and is looked up with [`SelectionOverlay::selected_in`].
#[derive(Debug, Clone, Default)]
pub struct SelectionOverlay {
    phase: OverlayPhase,
    selected_id: Option<String>,
    active: Option<TransitionStarted>,
    next_id: u64,
}

impl SelectionOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Id of the selected photo; `Some` exactly when the phase is not `Hidden`
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The transition whose completion is currently awaited
    #[must_use]
    pub const fn active_transition(&self) -> Option<TransitionStarted> {
        self.active
    }

    /// Resolve the selected photo against the current results
    #[must_use]
    pub fn selected_in<'a>(&self, photos: &'a [Photo]) -> Option<&'a Photo> {
        let id = self.selected_id.as_deref()?;
        photos.iter().find(|photo| photo.id == id)
    }

    /// Show `id` in the overlay
    ///
    /// From `Hidden` or `Exiting` this starts an enter transition. While
    /// `Entering` or `Visible` the selection is swapped in place and the
    /// running transition is left alone.
    pub fn select(&mut self, id: impl Into<String>) -> Option<TransitionStarted> {
        self.selected_id = Some(id.into());

        match self.phase {
            OverlayPhase::Hidden | OverlayPhase::Exiting => {
                self.phase = OverlayPhase::Entering;
                Some(self.start(TransitionKind::Enter))
            }
            OverlayPhase::Entering | OverlayPhase::Visible => None,
        }
    }

    /// Dismiss the overlay
    ///
    /// From `Visible` or `Entering` this starts an exit transition; from
    /// `Hidden` or `Exiting` it does nothing.
    pub fn close(&mut self) -> Option<TransitionStarted> {
        match self.phase {
            OverlayPhase::Visible | OverlayPhase::Entering => {
                self.phase = OverlayPhase::Exiting;
                Some(self.start(TransitionKind::Exit))
            }
            OverlayPhase::Hidden | OverlayPhase::Exiting => None,
        }
    }

    /// Apply a transition-complete event
    ///
    /// Returns `false` and changes nothing when `id` is not the transition in
    /// progress.
    pub fn complete(&mut self, id: TransitionId) -> bool {
        let Some(active) = self.active.filter(|active| active.id == id) else {
            return false;
        };

        self.active = None;
        match active.kind {
            TransitionKind::Enter => self.phase = OverlayPhase::Visible,
            TransitionKind::Exit => {
                self.phase = OverlayPhase::Hidden;
                self.selected_id = None;
            }
        }
        true
    }

    fn start(&mut self, kind: TransitionKind) -> TransitionStarted {
        self.next_id += 1;
        let started = TransitionStarted {
            id: TransitionId(self.next_id),
            kind,
        };
        self.active = Some(started);
        started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_selection_invariant(overlay: &SelectionOverlay) {
        assert_eq!(
            overlay.selected_id().is_some(),
            overlay.phase().is_shown(),
            "selected id must be present exactly when shown (phase {})",
            overlay.phase()
        );
    }

    #[test]
    fn test_full_cycle() {
        let mut overlay = SelectionOverlay::new();
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
        assert_selection_invariant(&overlay);

        let enter = overlay.select("p1").unwrap();
        assert_eq!(enter.kind, TransitionKind::Enter);
        assert_eq!(overlay.phase(), OverlayPhase::Entering);
        assert_selection_invariant(&overlay);

        assert!(overlay.complete(enter.id));
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
        assert_eq!(overlay.selected_id(), Some("p1"));

        let exit = overlay.close().unwrap();
        assert_eq!(exit.kind, TransitionKind::Exit);
        assert_eq!(overlay.phase(), OverlayPhase::Exiting);
        assert_selection_invariant(&overlay);

        assert!(overlay.complete(exit.id));
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
        assert_eq!(overlay.selected_id(), None);
        assert_selection_invariant(&overlay);
    }

    #[test]
    fn test_select_while_visible_swaps_without_transition() {
        let mut overlay = SelectionOverlay::new();
        let enter = overlay.select("p1").unwrap();
        overlay.complete(enter.id);

        assert!(overlay.select("p2").is_none());
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
        assert_eq!(overlay.selected_id(), Some("p2"));
    }

    #[test]
    fn test_select_while_entering_keeps_transition() {
        let mut overlay = SelectionOverlay::new();
        let enter = overlay.select("p1").unwrap();

        assert!(overlay.select("p2").is_none());
        assert_eq!(overlay.selected_id(), Some("p2"));
        assert_eq!(overlay.active_transition(), Some(enter));

        assert!(overlay.complete(enter.id));
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
    }

    #[test]
    fn test_close_is_noop_when_hidden_or_exiting() {
        let mut overlay = SelectionOverlay::new();
        assert!(overlay.close().is_none());
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);

        let enter = overlay.select("p1").unwrap();
        overlay.complete(enter.id);
        let exit = overlay.close().unwrap();

        assert!(overlay.close().is_none());
        assert_eq!(overlay.active_transition(), Some(exit));
    }

    #[test]
    fn test_superseded_enter_completion_is_ignored() {
        let mut overlay = SelectionOverlay::new();
        let enter = overlay.select("p1").unwrap();
        let exit = overlay.close().unwrap();
        assert_eq!(overlay.phase(), OverlayPhase::Exiting);

        assert!(!overlay.complete(enter.id));
        assert_eq!(overlay.phase(), OverlayPhase::Exiting);

        assert!(overlay.complete(exit.id));
        assert_eq!(overlay.phase(), OverlayPhase::Hidden);
        assert_selection_invariant(&overlay);
    }

    #[test]
    fn test_select_while_exiting_reenters() {
        let mut overlay = SelectionOverlay::new();
        let enter = overlay.select("p1").unwrap();
        overlay.complete(enter.id);
        let exit = overlay.close().unwrap();

        let reenter = overlay.select("p3").unwrap();
        assert_eq!(reenter.kind, TransitionKind::Enter);
        assert_eq!(overlay.phase(), OverlayPhase::Entering);
        assert_eq!(overlay.selected_id(), Some("p3"));

        assert!(!overlay.complete(exit.id));
        assert_eq!(overlay.selected_id(), Some("p3"));
        assert!(overlay.complete(reenter.id));
        assert_eq!(overlay.phase(), OverlayPhase::Visible);
    }

    #[test]
    fn test_transition_ids_are_unique() {
        let mut overlay = SelectionOverlay::new();
        let a = overlay.select("p1").unwrap();
        let b = overlay.close().unwrap();
        let c = overlay.select("p1").unwrap();

        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn test_selected_in_looks_up_by_id() {
        let photos = vec![Photo::new("p1", "t", "Ada"), Photo::new("p2", "t", "Bo")];
        let mut overlay = SelectionOverlay::new();
        assert!(overlay.selected_in(&photos).is_none());

        overlay.select("p2");
        assert_eq!(overlay.selected_in(&photos).map(|p| p.author_name.as_str()), Some("Bo"));

        overlay.select("gone");
        assert!(overlay.selected_in(&photos).is_none());
    }
}
