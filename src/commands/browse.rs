//! Browse command - interactive terminal browser

use crate::{
    PixrError,
    catalog::PhotoCatalogClient,
    cli::FilterArgs,
    config::PixrConfig,
    download::PhotoDownloader,
    search::SearchController,
    ui::{
        StatusBarWriter,
        tui::{self, App, Executor, Focus},
    },
};
use std::sync::Arc;
use tokio::runtime::Handle;

type Result<T> = std::result::Result<T, PixrError>;

/// Build the browser state, starting a search right away when `term` is given
#[must_use]
pub fn build_app(config: &PixrConfig, term: Option<&str>, filters: &FilterArgs) -> App {
    let mut controller = SearchController::new(config.pagination_trigger());
    let term = term.map(str::trim).filter(|t| !t.is_empty());

    match term {
        Some(term) => {
            controller.submit_query(filters.to_query(term));
        }
        None => {
            controller.submit_filters(filters.orientation, filters.color, filters.popular);
        }
    }

    let mut app = App::new(
        controller,
        config.transition_durations(),
        StatusBarWriter::new(),
    );
    if term.is_some() {
        app.set_focus(Focus::List);
        app.request_more();
    }
    app
}

/// Execute the browse command
///
/// Runs the terminal browser on the calling thread; catalog calls and
/// downloads are spawned on `handle`.
///
/// # Errors
/// Returns an error if the terminal cannot be used or the downloader cannot
/// be built.
pub fn execute(
    client: Arc<dyn PhotoCatalogClient>,
    handle: Handle,
    config: &PixrConfig,
    term: Option<&str>,
    filters: &FilterArgs,
) -> Result<()> {
    let app = build_app(config, term, filters);
    let downloader = PhotoDownloader::new(config.request_timeout())?;
    let (executor, events) =
        Executor::new(handle, client, downloader, config.download_dir_or_default());

    tui::run(app, &executor, events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Orientation, PhotoColor};
    use crate::ui::tui::Effect;

    #[test]
    fn test_initial_term_starts_search() {
        let filters = FilterArgs {
            orientation: Orientation::Portrait,
            color: None,
            popular: true,
        };
        let mut app = build_app(&PixrConfig::default(), Some("sunset"), &filters);

        assert_eq!(app.focus(), Focus::List);
        assert_eq!(app.input(), "sunset");
        let effects = app.take_effects();
        let [Effect::Fetch(ticket)] = effects.as_slice() else {
            panic!("expected a fetch, got {effects:?}");
        };
        assert_eq!(ticket.request().term, "sunset");
        assert_eq!(ticket.request().orientation, Orientation::Portrait);
        assert!(app.controller().query().popular_only);
    }

    #[test]
    fn test_filters_are_staged_without_term() {
        let filters = FilterArgs {
            orientation: Orientation::Any,
            color: Some(PhotoColor::Red),
            popular: false,
        };
        let mut app = build_app(&PixrConfig::default(), None, &filters);

        assert_eq!(app.focus(), Focus::Search);
        assert!(app.take_effects().is_empty());
        assert!(app.controller().session().is_none());
        assert_eq!(app.controller().query().color, Some(PhotoColor::Red));
    }
}
