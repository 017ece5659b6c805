//! Terminal setup and the main loop
//!
//! The loop runs on the calling thread and owns the [`App`]. Catalog calls
//! and downloads are spawned on a tokio runtime; their results come back
//! through an unbounded channel and are applied between frames.

use super::actions::{self, ActionOutcome};
use super::app::{App, AppEvent, Effect};
use super::events::{EventResult, handle_key, poll_key};
use super::theme::Theme;
use super::view;
use crate::catalog::PhotoCatalogClient;
use crate::download::{ImageSize, PhotoDownloader};
use crate::ui::error::Result;
use crate::ui::output::OutputWriter;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// Carries out [`Effect`]s on behalf of the UI thread
pub struct Executor {
    handle: Handle,
    client: Arc<dyn PhotoCatalogClient>,
    downloader: PhotoDownloader,
    download_dir: PathBuf,
    tx: UnboundedSender<AppEvent>,
}

impl Executor {
    /// Create an executor and the receiver its results arrive on
    #[must_use]
    pub fn new(
        handle: Handle,
        client: Arc<dyn PhotoCatalogClient>,
        downloader: PhotoDownloader,
        download_dir: PathBuf,
    ) -> (Self, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let executor = Self {
            handle,
            client,
            downloader,
            download_dir,
            tx,
        };
        (executor, rx)
    }

    /// Run or spawn one effect
    pub fn dispatch(&self, effect: Effect, status: &dyn OutputWriter) {
        match effect {
            Effect::Fetch(ticket) => {
                let client = Arc::clone(&self.client);
                let tx = self.tx.clone();
                self.handle.spawn(async move {
                    let result = client.search(ticket.request()).await;
                    send(&tx, AppEvent::PageLoaded { ticket, result });
                });
            }
            Effect::LoadDetails(photo_id) => {
                let client = Arc::clone(&self.client);
                let tx = self.tx.clone();
                self.handle.spawn(async move {
                    let result = client.get_details(&photo_id).await;
                    send(&tx, AppEvent::DetailsLoaded { photo_id, result });
                });
            }
            Effect::Download(photo) => {
                let downloader = self.downloader.clone();
                let dir = self.download_dir.clone();
                let tx = self.tx.clone();
                self.handle.spawn(async move {
                    let result = downloader.download(&photo, ImageSize::Full, &dir).await;
                    send(&tx, AppEvent::DownloadFinished(result));
                });
            }
            Effect::CopyUrl(url) => report(actions::copy_url(&url), status),
            Effect::OpenUrl(url) => report(actions::open_url(&url), status),
        }
    }
}

fn send(tx: &UnboundedSender<AppEvent>, event: AppEvent) {
    if tx.send(event).is_err() {
        debug!("browser closed before background work finished");
    }
}

fn report(outcome: ActionOutcome, status: &dyn OutputWriter) {
    match outcome {
        ActionOutcome::Success(message) => status.success(&message),
        ActionOutcome::Failed(message) => {
            warn!(%message, "desktop action failed");
            status.error(&message);
        }
    }
}

/// Setup terminal for TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the browser until the user quits
///
/// # Errors
/// Returns an error if the terminal cannot be set up, drawn to, or read.
pub fn run(mut app: App, executor: &Executor, mut events: UnboundedReceiver<AppEvent>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, executor, &mut events);
    cleanup_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    executor: &Executor,
    events: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let theme = Theme::default();

    while !app.should_quit() {
        for effect in app.take_effects() {
            executor.dispatch(effect, app.status());
        }

        let now = Instant::now();
        terminal.draw(|frame| view::render(frame, app, &theme, now))?;

        if let Some(key) = poll_key(app.poll_timeout(now))?
            && handle_key(app, key, Instant::now()) == EventResult::Quit
        {
            break;
        }

        while let Ok(event) = events.try_recv() {
            app.apply(event);
        }
        app.tick(Instant::now());
    }
    Ok(())
}
