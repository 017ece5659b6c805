//! Search session state
//!
//! A [`SearchSession`] is the live state of one query: the accumulated
//! results, the pagination cursor and the single-flight flag. Sessions are
//! never reused across queries; a new search or filter change replaces the
//! whole value with one carrying the next generation.
//!
//! # Fetch Lifecycle
//!
//! ```text
//! begin_fetch()
//!     ├─ in flight → Err(Busy), nothing changes
//!     └─ otherwise → outstanding = Some(seq), FetchTicket { seq, generation, request }
//!         ↓
//!     caller awaits PhotoCatalogClient::search
//!         ↓
//! complete_fetch(ticket, result)
//!     ├─ ticket.seq != outstanding → Err(UnknownTicket), nothing changes
//!     ├─ ticket.generation != generation → Stale, only the flag is cleared
//!     ├─ Err(e) → flag cleared, page kept, Err(Catalog(e))
//!     └─ Ok(page) → filter, merge, page += 1, flag cleared
//! ```

use super::accumulator::ResultAccumulator;
use super::error::FetchError;
use super::query::SearchQuery;
use crate::catalog::{CatalogError, Photo, ResultPage, SearchRequest};
use crate::filters::FilterPipeline;
use tracing::{debug, warn};

/// Proof that a fetch was admitted by the single-flight gate
///
/// Carries the generation of the session that issued it so a completion can
/// be matched against the session that is current when it arrives. Tickets
/// cannot be copied; each one completes at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    generation: u64,
    request: SearchRequest,
}

impl FetchTicket {
    /// Admission number, unique across the sessions of one controller
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Parameters to send to the catalog
    #[must_use]
    pub const fn request(&self) -> &SearchRequest {
        &self.request
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.request.page
    }
}

/// What a successful merge did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Page number that was merged
    pub page: u32,
    /// Photos in the catalog response
    pub received: usize,
    /// Photos rejected by the client-side filters
    pub filtered_out: usize,
    /// Photos appended to the results
    pub added: usize,
    /// Photos dropped because their id was already present
    pub duplicates: usize,
    /// Total the catalog reported for the query
    pub total_available: u64,
}

/// Result of completing a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was merged into the current session
    Merged(MergeSummary),
    /// The response belonged to a replaced session and was discarded
    Stale {
        ticket_generation: u64,
        current_generation: u64,
    },
}

impl FetchOutcome {
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::Stale { .. })
    }

    /// Merge counts, if the response was applied
    #[must_use]
    pub const fn summary(&self) -> Option<&MergeSummary> {
        match self {
            Self::Merged(summary) => Some(summary),
            Self::Stale { .. } => None,
        }
    }
}

/// Live state of one search
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: SearchQuery,
    results: ResultAccumulator,
    current_page: u32,
    total_available: u64,
    total_pages: Option<u32>,
    /// Sequence number of the ticket currently holding the gate
    outstanding: Option<u64>,
    issued: u64,
    generation: u64,
    exhausted: bool,
}

impl SearchSession {
    /// Fresh session for `query` at `generation`
    #[must_use]
    pub fn new(query: SearchQuery, generation: u64) -> Self {
        Self {
            query,
            results: ResultAccumulator::new(),
            current_page: 1,
            total_available: 0,
            total_pages: None,
            outstanding: None,
            issued: 0,
            generation,
            exhausted: false,
        }
    }

    /// Build the session that replaces this one
    ///
    /// Everything is reset except the gate: an outstanding request from this
    /// session still holds it until its (stale) result comes back. Ticket
    /// numbering continues so old tickets never match new ones.
    #[must_use]
    pub fn replaced(&self, query: SearchQuery) -> Self {
        Self {
            outstanding: self.outstanding,
            issued: self.issued,
            ..Self::new(query, self.generation + 1)
        }
    }

    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Accumulated photos in first-seen order
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        self.results.photos()
    }

    #[must_use]
    pub const fn results(&self) -> &ResultAccumulator {
        &self.results
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Next page to request (1-based)
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn total_available(&self) -> u64 {
        self.total_available
    }

    #[must_use]
    pub const fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.outstanding.is_some()
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the catalog has no more pages for this query
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of pages merged so far
    #[must_use]
    pub const fn pages_loaded(&self) -> u32 {
        self.current_page - 1
    }

    /// Admit a fetch through the single-flight gate
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Busy` without touching any state when a fetch is
    /// already outstanding.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket, FetchError> {
        if self.outstanding.is_some() {
            debug!(generation = self.generation, "fetch rejected, already in flight");
            return Err(FetchError::Busy);
        }

        self.issued += 1;
        self.outstanding = Some(self.issued);
        let ticket = FetchTicket {
            seq: self.issued,
            generation: self.generation,
            request: self.query.request(self.current_page),
        };
        debug!(
            generation = self.generation,
            page = self.current_page,
            term = %self.query.term,
            "fetch started"
        );
        Ok(ticket)
    }

    /// Apply the result of the call admitted by `ticket`
    ///
    /// A ticket from an earlier generation is discarded whether it succeeded
    /// or failed. On failure the session keeps its results and page so the
    /// same page is requested on the next attempt.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::UnknownTicket` without touching any state when
    /// `ticket` is not the one holding the gate, and `FetchError::Catalog`
    /// when the call failed for the current generation.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ResultPage, CatalogError>,
    ) -> Result<FetchOutcome, FetchError> {
        self.release(ticket.seq)?;

        if ticket.generation != self.generation {
            debug!(
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                "discarding stale response"
            );
            return Ok(FetchOutcome::Stale {
                ticket_generation: ticket.generation,
                current_generation: self.generation,
            });
        }

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                warn!(page = self.current_page, error = %err, "page fetch failed");
                return Err(FetchError::Catalog(err));
            }
        };

        let received = page.photos.len();
        let kept = FilterPipeline::apply(&self.query, page.photos);
        let filtered_out = received - kept.len();
        let stats = self.results.merge(kept);

        let merged_page = self.current_page;
        self.total_available = page.total_available;
        self.total_pages = page.total_pages.or(self.total_pages);
        self.current_page += 1;
        self.exhausted = received == 0
            || self
                .total_pages
                .is_some_and(|total| self.current_page > total);

        debug!(
            page = merged_page,
            received,
            filtered_out,
            added = stats.added,
            duplicates = stats.duplicates,
            total = self.results.len(),
            "page merged"
        );

        Ok(FetchOutcome::Merged(MergeSummary {
            page: merged_page,
            received,
            filtered_out,
            added: stats.added,
            duplicates: stats.duplicates,
            total_available: self.total_available,
        }))
    }

    /// Give up on `ticket` without a result
    ///
    /// Frees the gate when the caller stops waiting for the catalog, e.g.
    /// because its future was dropped. The page cursor is left as is.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::UnknownTicket` when `ticket` is not outstanding.
    pub fn cancel_fetch(&mut self, ticket: FetchTicket) -> Result<(), FetchError> {
        self.abandon(ticket.seq)
    }

    pub(super) fn abandon(&mut self, seq: u64) -> Result<(), FetchError> {
        self.release(seq)?;
        debug!(seq, page = self.current_page, "fetch cancelled");
        Ok(())
    }

    fn release(&mut self, seq: u64) -> Result<(), FetchError> {
        if self.outstanding != Some(seq) {
            warn!(
                seq,
                outstanding = ?self.outstanding,
                "ignoring ticket that does not hold the fetch gate"
            );
            return Err(FetchError::UnknownTicket(seq));
        }
        self.outstanding = None;
        Ok(())
    }
}
