//! Pixr CLI application entry point
//!
//! Keyword search over the Unsplash photo catalog from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! pixr
//! pixr browse mountains --orientation landscape
//!
//! # Print results, three pages deep, only popular photos
//! pixr search "red car" --pages 3 --popular
//!
//! # Inspect and save a single photo
//! pixr details Dwu85P9SOIk
//! pixr download Dwu85P9SOIk --dir ~/Pictures
//!
//! # Quiet mode (only output results)
//! pixr -q search cat --json
//! ```
//!
//! # Configuration
//!
//! On first run, pixr asks for an Unsplash access key. Configuration is
//! stored in the user's config directory (`~/.config/pixr/config.toml` on
//! Linux).

use pixr::{
    PixrError,
    catalog::{CachedCatalog, PhotoCatalogClient, UnsplashClient},
    cli::{Cli, Commands},
    commands,
    config::{ACCESS_KEY_ENV, PixrConfig},
    download::{ImageSize, PhotoDownloader},
    logging::{self, LogTarget},
    ui::StdoutWriter,
};
use std::io;
use std::sync::Arc;

type Result<T> = std::result::Result<T, PixrError>;

/// Build the catalog client stack from configuration
///
/// # Errors
/// Returns `PixrError::InvalidInput` when no access key is configured.
fn build_client(config: &PixrConfig) -> Result<Arc<dyn PhotoCatalogClient>> {
    let access_key = config.resolved_access_key().ok_or_else(|| {
        PixrError::InvalidInput(format!(
            "No access key configured. Set {ACCESS_KEY_ENV} or run 'pixr config set access_key=<KEY>'."
        ))
    })?;

    let unsplash = UnsplashClient::new(
        &access_key,
        &config.api_base_url,
        config.per_page,
        config.request_timeout(),
    )?;
    Ok(Arc::new(CachedCatalog::new(
        unsplash,
        config.detail_cache_capacity,
    )))
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    if let Commands::Completions { shell } = &command {
        return commands::completions(*shell, &mut io::stdout());
    }

    // the browser owns the terminal, so its logs go to a file
    let log_target = match (&command, logging::default_log_path()) {
        (Commands::Browse { .. }, Some(path)) => LogTarget::File(path),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, &log_target)?;

    let mut config = if command.needs_catalog() {
        PixrConfig::load_or_setup()?
    } else {
        PixrConfig::load()?
    };
    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::new(quiet);

    if let Commands::Config { command } = &command {
        return commands::config(&mut config, command, &output);
    }

    let client = build_client(&config)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match command {
        Commands::Browse { term, filters } => commands::browse(
            client,
            runtime.handle().clone(),
            &config,
            term.as_deref(),
            &filters,
        ),
        Commands::Search {
            term,
            filters,
            pages,
            json,
        } => runtime.block_on(commands::search(
            client.as_ref(),
            filters.to_query(term),
            config.pagination_trigger(),
            pages,
            json,
            &output,
        )),
        Commands::Details { id, json } => {
            runtime.block_on(commands::details(client.as_ref(), &id, json, &output))
        }
        Commands::Download { id, dir, thumbnail } => {
            let downloader = PhotoDownloader::new(config.request_timeout())?;
            let dir = dir.unwrap_or_else(|| config.download_dir_or_default());
            let size = if thumbnail {
                ImageSize::Thumbnail
            } else {
                ImageSize::Full
            };
            runtime.block_on(commands::download(
                client.as_ref(),
                &downloader,
                &id,
                &dir,
                size,
                &output,
            ))
        }
        // handled before the runtime exists
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}
