//! Near-end pagination trigger

use super::session::SearchSession;

/// Results stop growing once a session holds this many photos
pub const DEFAULT_RESULT_CAP: usize = 500;

/// Rows from the end of the list at which the next page is requested
pub const DEFAULT_NEAR_END_THRESHOLD: usize = 5;

/// Why the trigger did or did not request a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerDecision {
    /// Request the next page
    Fetch,
    /// A fetch is already outstanding
    InFlight,
    /// The session reached the result cap; inert until reset
    Capped,
    /// The catalog has no more pages; inert until reset
    Exhausted,
    /// The viewport is not close enough to the end
    TooFar,
}

impl TriggerDecision {
    #[must_use]
    pub const fn should_fetch(self) -> bool {
        matches!(self, Self::Fetch)
    }

    /// Whether no further fetch can happen for this session
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Capped | Self::Exhausted)
    }
}

/// Translates "the user is near the end of the list" into a fetch decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationTrigger {
    threshold: usize,
    cap: usize,
}

impl Default for PaginationTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_NEAR_END_THRESHOLD, DEFAULT_RESULT_CAP)
    }
}

impl PaginationTrigger {
    /// `distance_from_end` must be below `threshold` to trigger
    #[must_use]
    pub const fn new(threshold: usize, cap: usize) -> Self {
        Self { threshold, cap }
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    #[must_use]
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Decide whether `session` should fetch its next page
    #[must_use]
    pub fn evaluate(&self, session: &SearchSession, distance_from_end: usize) -> TriggerDecision {
        if session.len() >= self.cap {
            TriggerDecision::Capped
        } else if session.is_exhausted() {
            TriggerDecision::Exhausted
        } else if session.is_fetching() {
            TriggerDecision::InFlight
        } else if distance_from_end >= self.threshold {
            TriggerDecision::TooFar
        } else {
            TriggerDecision::Fetch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchQuery;
    use crate::testing::{page_of, photo_range};

    fn loaded_session(count: usize) -> SearchSession {
        let mut session = SearchSession::new(SearchQuery::new("cat"), 1);
        let ticket = session.begin_fetch().unwrap();
        session
            .complete_fetch(ticket, Ok(page_of(photo_range(0, count), 10_000, 1)))
            .unwrap();
        session
    }

    #[test]
    fn test_fetches_when_near_end() {
        let trigger = PaginationTrigger::default();
        let session = loaded_session(30);

        assert_eq!(trigger.evaluate(&session, 0), TriggerDecision::Fetch);
        assert_eq!(trigger.evaluate(&session, 4), TriggerDecision::Fetch);
        assert_eq!(trigger.evaluate(&session, 5), TriggerDecision::TooFar);
    }

    #[test]
    fn test_in_flight_blocks() {
        let trigger = PaginationTrigger::default();
        let mut session = loaded_session(30);
        let _ticket = session.begin_fetch().unwrap();

        assert_eq!(trigger.evaluate(&session, 0), TriggerDecision::InFlight);
    }

    #[test]
    fn test_cap_is_inert() {
        let trigger = PaginationTrigger::new(5, 30);
        let session = loaded_session(30);

        let decision = trigger.evaluate(&session, 0);
        assert_eq!(decision, TriggerDecision::Capped);
        assert!(decision.is_final());
        assert!(!decision.should_fetch());
    }

    #[test]
    fn test_empty_fresh_session_fetches() {
        let trigger = PaginationTrigger::default();
        let session = SearchSession::new(SearchQuery::new("cat"), 1);

        assert!(trigger.evaluate(&session, 0).should_fetch());
    }

    #[test]
    fn test_exhausted_is_inert() {
        let trigger = PaginationTrigger::default();
        let session = loaded_session(0);

        assert_eq!(trigger.evaluate(&session, 0), TriggerDecision::Exhausted);
    }
}
