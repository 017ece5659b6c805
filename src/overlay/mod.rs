//! Detail overlay for the selected photo
//!
//! [`SelectionOverlay`] is the state machine; [`TransitionTimers`] turns the
//! transitions it starts into timed completion events.

mod state;
mod timers;

pub use state::{OverlayPhase, SelectionOverlay, TransitionId, TransitionKind, TransitionStarted};
pub use timers::{DEFAULT_ENTER_MS, DEFAULT_EXIT_MS, TransitionDurations, TransitionTimers};
