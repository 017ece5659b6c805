//! Browser state
//!
//! [`App`] is the single owner of the search controller, the selection
//! overlay and its timers. Key handlers and completed background work mutate
//! it; anything that has to leave the UI thread is queued as an [`Effect`]
//! and picked up by the runner.

use crate::catalog::{CatalogError, Orientation, Photo, PhotoColor, PhotoDetails, ResultPage};
use crate::download::{DownloadError, DownloadReport, ImageSize, source_url};
use crate::overlay::{
    OverlayPhase, SelectionOverlay, TransitionDurations, TransitionKind, TransitionStarted,
    TransitionTimers,
};
use crate::search::{FetchError, FetchOutcome, FetchTicket, SearchController, TriggerDecision};
use crate::ui::output::{OutputWriter, StatusBarWriter};
use std::time::{Duration, Instant};
use tracing::debug;

/// Rows moved by PageUp/PageDown
pub const PAGE_STEP: usize = 10;

/// Redraw interval while idle
const IDLE_TICK: Duration = Duration::from_millis(100);
/// Redraw interval while the overlay is sliding
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Which part of the screen receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    List,
}

/// Work the UI thread hands off to the runner
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Perform the admitted catalog search
    Fetch(FetchTicket),
    /// Look up the full record of a photo
    LoadDetails(String),
    /// Save the photo's full image
    Download(Photo),
    CopyUrl(String),
    OpenUrl(String),
}

/// Completed background work, delivered back to the UI thread
#[derive(Debug)]
pub enum AppEvent {
    PageLoaded {
        ticket: FetchTicket,
        result: Result<ResultPage, CatalogError>,
    },
    DetailsLoaded {
        photo_id: String,
        result: Result<PhotoDetails, CatalogError>,
    },
    DownloadFinished(Result<DownloadReport, DownloadError>),
}

/// What the list shows below its last row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFooter {
    /// No search submitted yet
    Prompt,
    Loading,
    /// Catalog has nothing more for this query
    End,
    /// Result cap reached
    Capped,
    None,
}

/// State of the interactive browser
pub struct App {
    controller: SearchController,
    overlay: SelectionOverlay,
    timers: TransitionTimers,
    details: Option<PhotoDetails>,
    input: String,
    focus: Focus,
    cursor: usize,
    status: StatusBarWriter,
    effects: Vec<Effect>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        controller: SearchController,
        durations: TransitionDurations,
        status: StatusBarWriter,
    ) -> Self {
        let input = controller.query().term.clone();
        Self {
            controller,
            overlay: SelectionOverlay::new(),
            timers: TransitionTimers::new(durations),
            details: None,
            input,
            focus: Focus::Search,
            cursor: 0,
            status,
            effects: Vec::new(),
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn controller(&self) -> &SearchController {
        &self.controller
    }

    #[must_use]
    pub const fn overlay(&self) -> &SelectionOverlay {
        &self.overlay
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn status(&self) -> &StatusBarWriter {
        &self.status
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Whether the overlay takes key input (shown and not on its way out)
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        matches!(
            self.overlay.phase(),
            OverlayPhase::Entering | OverlayPhase::Visible
        )
    }

    /// Drain the queued effects
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// The photo shown in the overlay, looked up in the current results
    #[must_use]
    pub fn selected_photo(&self) -> Option<&Photo> {
        self.overlay.selected_in(self.controller.photos())
    }

    /// Details for the selected photo, if they have arrived
    #[must_use]
    pub fn selected_details(&self) -> Option<&PhotoDetails> {
        let selected = self.overlay.selected_id()?;
        self.details.as_ref().filter(|d| d.photo.id == selected)
    }

    /// Slide state of the running transition at `now`
    #[must_use]
    pub fn transition_progress(&self, now: Instant) -> Option<(TransitionKind, f64)> {
        let active = self.overlay.active_transition()?;
        let progress = self.timers.progress(active.id, now)?;
        Some((active.kind, progress))
    }

    /// How long the runner may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.overlay.phase().is_transitioning() {
            return ANIMATION_TICK;
        }
        self.timers
            .next_deadline()
            .map_or(IDLE_TICK, |due| due.saturating_duration_since(now).min(IDLE_TICK))
    }

    #[must_use]
    pub fn list_footer(&self) -> ListFooter {
        match self.controller.evaluate_near_end(0) {
            None => ListFooter::Prompt,
            Some(TriggerDecision::InFlight) => ListFooter::Loading,
            Some(TriggerDecision::Exhausted) => ListFooter::End,
            Some(TriggerDecision::Capped) => ListFooter::Capped,
            Some(TriggerDecision::Fetch | TriggerDecision::TooFar) => ListFooter::None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Start a new search for the typed term
    pub fn submit_input(&mut self, now: Instant) {
        let term = self.input.trim().to_string();
        if term.is_empty() {
            self.status.warning("Type a search term first");
            return;
        }
        self.controller.submit_search(term);
        self.focus = Focus::List;
        self.after_reset(now);
    }

    pub fn cycle_orientation(&mut self, now: Instant) {
        let query = self.controller.query();
        let (orientation, color, popular) = (query.orientation.cycle(), query.color, query.popular_only);
        self.apply_filters(orientation, color, popular, now);
    }

    pub fn cycle_color(&mut self, now: Instant) {
        let query = self.controller.query();
        let (orientation, color, popular) = (query.orientation, PhotoColor::cycle(query.color), query.popular_only);
        self.apply_filters(orientation, color, popular, now);
    }

    pub fn toggle_popular(&mut self, now: Instant) {
        let query = self.controller.query();
        let (orientation, color, popular) = (query.orientation, query.color, !query.popular_only);
        self.apply_filters(orientation, color, popular, now);
    }

    fn apply_filters(
        &mut self,
        orientation: Orientation,
        color: Option<PhotoColor>,
        popular_only: bool,
        now: Instant,
    ) {
        if self
            .controller
            .submit_filters(orientation, color, popular_only)
            .is_some()
        {
            self.after_reset(now);
        }
        self.status
            .info(&format!("Filters: {}", self.controller.query().filter_summary()));
    }

    fn after_reset(&mut self, now: Instant) {
        self.cursor = 0;
        if let Some(started) = self.overlay.close() {
            self.schedule(started, now);
        }
        self.request_more();
    }

    /// Move the cursor by `delta` rows, clamped to the list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.controller.photos().len();
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
        }
        self.request_more();
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.controller.photos().len().saturating_sub(1);
        self.request_more();
    }

    /// Rows below the cursor
    #[must_use]
    pub fn distance_from_end(&self) -> usize {
        self.controller
            .photos()
            .len()
            .saturating_sub(self.cursor + 1)
    }

    /// Near-end signal for the current cursor position
    pub fn request_more(&mut self) {
        if let Some(ticket) = self.controller.on_near_end(self.distance_from_end()) {
            debug!(page = ticket.page(), generation = ticket.generation(), "near end, fetching");
            self.effects.push(Effect::Fetch(ticket));
        }
    }

    /// Open the overlay on the photo under the cursor
    pub fn select_current(&mut self, now: Instant) {
        let Some(id) = self.controller.photos().get(self.cursor).map(|p| p.id.clone()) else {
            return;
        };
        if self.overlay.selected_id() == Some(id.as_str()) && self.overlay_open() {
            return;
        }
        if let Some(started) = self.overlay.select(id.clone()) {
            self.schedule(started, now);
        }
        if self.selected_details().is_none() {
            self.effects.push(Effect::LoadDetails(id));
        }
    }

    /// Move the cursor while the overlay is open, following with the selection
    pub fn step_selection(&mut self, delta: isize, now: Instant) {
        self.move_cursor(delta);
        self.select_current(now);
    }

    pub fn close_overlay(&mut self, now: Instant) {
        if let Some(started) = self.overlay.close() {
            self.schedule(started, now);
        }
    }

    fn schedule(&mut self, started: TransitionStarted, now: Instant) {
        self.timers.schedule(started, now);
    }

    /// Photo record best suited for actions on the selection
    fn action_photo(&self) -> Option<&Photo> {
        self.selected_details()
            .map(|d| &d.photo)
            .or_else(|| self.selected_photo())
    }

    pub fn download_selected(&mut self) {
        let Some(photo) = self.action_photo().cloned() else {
            return;
        };
        self.status.info(&format!("Downloading {}…", photo.id));
        self.effects.push(Effect::Download(photo));
    }

    pub fn copy_selected_url(&mut self) {
        let url = match self.action_photo().map(|p| source_url(p, ImageSize::Full)) {
            Some(Ok(url)) => url.to_string(),
            Some(Err(e)) => {
                self.status.error(&e.to_string());
                return;
            }
            None => return,
        };
        self.effects.push(Effect::CopyUrl(url));
    }

    /// Open the photo's web page, or its image when the page is unknown
    pub fn open_selected(&mut self) {
        let page = self.selected_details().and_then(|d| d.page_url.clone());
        let url = match page {
            Some(url) => url,
            None => match self.action_photo().map(|p| source_url(p, ImageSize::Full)) {
                Some(Ok(url)) => url.to_string(),
                Some(Err(e)) => {
                    self.status.error(&e.to_string());
                    return;
                }
                None => return,
            },
        };
        self.effects.push(Effect::OpenUrl(url));
    }

    /// Fire every transition completion due at `now`
    pub fn tick(&mut self, now: Instant) {
        for id in self.timers.take_due(now) {
            self.overlay.complete(id);
        }
        if self.overlay.phase() == OverlayPhase::Hidden {
            self.details = None;
        }
    }

    /// Apply completed background work
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::PageLoaded { ticket, result } => self.on_page_loaded(ticket, result),
            AppEvent::DetailsLoaded { photo_id, result } => {
                if self.overlay.selected_id() != Some(photo_id.as_str()) {
                    debug!(%photo_id, "details arrived after selection changed");
                    return;
                }
                match result {
                    Ok(details) => self.details = Some(details),
                    Err(e) => self.status.error(&format!("Could not load details: {e}")),
                }
            }
            AppEvent::DownloadFinished(Ok(report)) => self.status.success(&format!(
                "Saved {} ({})",
                report.path.display(),
                report.human_size()
            )),
            AppEvent::DownloadFinished(Err(e)) => {
                self.status.error(&format!("Download failed: {e}"));
            }
        }
    }

    fn on_page_loaded(&mut self, ticket: FetchTicket, result: Result<ResultPage, CatalogError>) {
        match self.controller.complete_fetch(ticket, result) {
            Ok(FetchOutcome::Merged(summary)) => {
                if summary.received > 0 && summary.added == 0 {
                    self.status
                        .info(&format!("Page {} had no matching photos", summary.page));
                }
                self.request_more();
            }
            Ok(FetchOutcome::Stale { .. }) => self.request_more(),
            Err(FetchError::UnknownTicket(seq)) => {
                debug!(seq, "page arrived for a ticket that no longer holds the gate");
            }
            Err(FetchError::Catalog(e)) if e.is_rate_limited() => {
                self.status
                    .warning("Rate limited by the catalog; scroll again in a moment");
            }
            Err(e) => self.status.error(&format!("Loading photos failed: {e}")),
        }
    }
}
