//! Transition completion scheduling
//!
//! The overlay never sleeps. Its owner records each started transition here
//! and polls [`TransitionTimers::take_due`] from its tick loop, feeding the
//! returned ids back into [`SelectionOverlay::complete`](super::SelectionOverlay::complete).

use super::state::{TransitionId, TransitionKind, TransitionStarted};
use std::time::{Duration, Instant};

pub const DEFAULT_ENTER_MS: u64 = 300;
pub const DEFAULT_EXIT_MS: u64 = 500;

/// How long each kind of transition takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDurations {
    pub enter: Duration,
    pub exit: Duration,
}

impl Default for TransitionDurations {
    fn default() -> Self {
        Self::from_millis(DEFAULT_ENTER_MS, DEFAULT_EXIT_MS)
    }
}

impl TransitionDurations {
    #[must_use]
    pub const fn from_millis(enter_ms: u64, exit_ms: u64) -> Self {
        Self {
            enter: Duration::from_millis(enter_ms),
            exit: Duration::from_millis(exit_ms),
        }
    }

    #[must_use]
    pub const fn for_kind(&self, kind: TransitionKind) -> Duration {
        match kind {
            TransitionKind::Enter => self.enter,
            TransitionKind::Exit => self.exit,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    started: TransitionStarted,
    at: Instant,
    due: Instant,
}

/// Pending transition completions
#[derive(Debug, Clone, Default)]
pub struct TransitionTimers {
    durations: TransitionDurations,
    pending: Vec<Scheduled>,
}

impl TransitionTimers {
    #[must_use]
    pub const fn new(durations: TransitionDurations) -> Self {
        Self {
            durations,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub const fn durations(&self) -> TransitionDurations {
        self.durations
    }

    /// Schedule the completion of `started`, measured from `now`
    pub fn schedule(&mut self, started: TransitionStarted, now: Instant) {
        let due = now + self.durations.for_kind(started.kind);
        self.pending.push(Scheduled {
            started,
            at: now,
            due,
        });
    }

    /// Remove and return every completion due at `now`, oldest first
    ///
    /// Ids of superseded transitions are returned too; the overlay ignores
    /// them.
    pub fn take_due(&mut self, now: Instant) -> Vec<TransitionId> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|entry| {
            if entry.due <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| entry.due);
        due.into_iter().map(|entry| entry.started.id).collect()
    }

    /// Fraction of `id`'s duration elapsed at `now`, in `0.0..=1.0`
    #[must_use]
    pub fn progress(&self, id: TransitionId, now: Instant) -> Option<f64> {
        let entry = self.pending.iter().find(|entry| entry.started.id == id)?;
        let total = entry.due.saturating_duration_since(entry.at).as_secs_f64();
        if total <= f64::EPSILON {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(entry.at).as_secs_f64();
        Some((elapsed / total).clamp(0.0, 1.0))
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|entry| entry.due).min()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
