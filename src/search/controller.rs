//! Search controller
//!
//! Owns the current [`SearchSession`] and is the only place sessions are
//! created or replaced. Rendering code reads snapshots through
//! [`SearchController::photos`] and drives state exclusively through the
//! operations below.

use super::error::FetchError;
use super::pagination::{PaginationTrigger, TriggerDecision};
use super::query::SearchQuery;
use super::session::{FetchOutcome, FetchTicket, SearchSession};
use crate::catalog::{CatalogError, Orientation, Photo, PhotoCatalogClient, PhotoColor, ResultPage};
use tracing::debug;

#[derive(Debug, Default)]
pub struct SearchController {
    session: Option<SearchSession>,
    query: SearchQuery,
    trigger: PaginationTrigger,
}

impl SearchController {
    #[must_use]
    pub fn new(trigger: PaginationTrigger) -> Self {
        Self {
            session: None,
            query: SearchQuery::default(),
            trigger,
        }
    }

    /// The session for the most recent submit, if any
    #[must_use]
    pub const fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    /// Query of the current session, or the filters staged before the first search
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    #[must_use]
    pub const fn trigger(&self) -> &PaginationTrigger {
        &self.trigger
    }

    /// Accumulated photos of the current session
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        self.session
            .as_ref()
            .map(SearchSession::photos)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.session.as_ref().is_some_and(SearchSession::is_fetching)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.session.as_ref().map_or(0, SearchSession::generation)
    }

    /// Start a new session for `term`, keeping the active filters
    ///
    /// Returns the generation of the new session.
    pub fn submit_search(&mut self, term: impl Into<String>) -> u64 {
        let query = self.query.with_term(term);
        self.replace_session(query)
    }

    /// Start a new session with different filters
    ///
    /// Before the first search the filters are only staged and `None` is
    /// returned.
    pub fn submit_filters(
        &mut self,
        orientation: Orientation,
        color: Option<PhotoColor>,
        popular_only: bool,
    ) -> Option<u64> {
        let query = self
            .query
            .clone()
            .with_orientation(orientation)
            .with_color(color)
            .with_popular_only(popular_only);

        if self.session.is_none() {
            self.query = query;
            return None;
        }
        Some(self.replace_session(query))
    }

    /// Start a new session for a fully built query
    pub fn submit_query(&mut self, query: SearchQuery) -> u64 {
        self.replace_session(query)
    }

    fn replace_session(&mut self, query: SearchQuery) -> u64 {
        let session = match &self.session {
            Some(previous) => previous.replaced(query.clone()),
            None => SearchSession::new(query.clone(), 1),
        };
        let generation = session.generation();

        debug!(
            generation,
            term = %query.term,
            filters = %query.filter_summary(),
            in_flight = session.is_fetching(),
            "search session replaced"
        );

        self.query = query;
        self.session = Some(session);
        generation
    }

    /// Admit a fetch for the current session's next page
    ///
    /// # Errors
    ///
    /// `NoActiveSearch` before the first submit, `Busy` while a fetch is in
    /// flight.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket, FetchError> {
        self.session
            .as_mut()
            .ok_or(FetchError::NoActiveSearch)?
            .begin_fetch()
    }

    /// Feed a catalog result back into the session
    ///
    /// # Errors
    ///
    /// `Catalog` when the current generation's call failed.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ResultPage, CatalogError>,
    ) -> Result<FetchOutcome, FetchError> {
        self.session
            .as_mut()
            .ok_or(FetchError::NoActiveSearch)?
            .complete_fetch(ticket, result)
    }

    /// Fetch and merge the next page in one step
    ///
    /// # Errors
    ///
    /// See [`Self::begin_fetch`] and [`Self::complete_fetch`].
    pub async fn fetch_next_page<C>(&mut self, client: &C) -> Result<FetchOutcome, FetchError>
    where
        C: PhotoCatalogClient + ?Sized,
    {
        let ticket = self.begin_fetch()?;
        self.run_fetch(ticket, client).await
    }

    /// Give up on an admitted fetch without a result
    ///
    /// # Errors
    ///
    /// `UnknownTicket` when `ticket` does not hold the gate.
    pub fn cancel_fetch(&mut self, ticket: FetchTicket) -> Result<(), FetchError> {
        self.session
            .as_mut()
            .ok_or(FetchError::NoActiveSearch)?
            .cancel_fetch(ticket)
    }

    async fn run_fetch<C>(
        &mut self,
        ticket: FetchTicket,
        client: &C,
    ) -> Result<FetchOutcome, FetchError>
    where
        C: PhotoCatalogClient + ?Sized,
    {
        let mut pending = PendingFetch {
            controller: self,
            seq: ticket.seq(),
            armed: true,
        };
        let result = client.search(ticket.request()).await;
        pending.armed = false;
        pending.controller.complete_fetch(ticket, result)
    }

    /// What the trigger would do at `distance_from_end`
    #[must_use]
    pub fn evaluate_near_end(&self, distance_from_end: usize) -> Option<TriggerDecision> {
        self.session
            .as_ref()
            .map(|session| self.trigger.evaluate(session, distance_from_end))
    }

    /// Near-end signal from the list view
    ///
    /// Returns a ticket when a fetch was admitted; the caller must hand the
    /// catalog result back through [`Self::complete_fetch`].
    pub fn on_near_end(&mut self, distance_from_end: usize) -> Option<FetchTicket> {
        if !self.evaluate_near_end(distance_from_end)?.should_fetch() {
            return None;
        }
        self.begin_fetch().ok()
    }

    /// Near-end signal for sequential callers
    ///
    /// Returns `Ok(None)` when the trigger decided not to fetch.
    ///
    /// # Errors
    ///
    /// `Catalog` when the admitted fetch failed.
    pub async fn load_more<C>(
        &mut self,
        client: &C,
        distance_from_end: usize,
    ) -> Result<Option<FetchOutcome>, FetchError>
    where
        C: PhotoCatalogClient + ?Sized,
    {
        let Some(ticket) = self.on_near_end(distance_from_end) else {
            return Ok(None);
        };
        self.run_fetch(ticket, client).await.map(Some)
    }
}

/// Frees the fetch gate when a sequential fetch is dropped mid-request
struct PendingFetch<'a> {
    controller: &'a mut SearchController,
    seq: u64,
    armed: bool,
}

impl Drop for PendingFetch<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Some(session) = self.controller.session.as_mut() {
            // nothing to free when the ticket no longer holds the gate
            let _ = session.abandon(self.seq);
        }
    }
}
