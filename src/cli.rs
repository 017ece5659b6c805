//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for pixr using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive terminal browser (default)
//! - **search**: Print matching photos, optionally several pages
//! - **details**: Show the full record of one photo
//! - **download**: Save a photo as `<id>.jpg`
//! - **config**: Read and change settings
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use pixr::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["pixr", "search", "cat", "--popular"]);
//! assert!(matches!(cli.get_command(), Commands::Search { .. }));
//! ```

use crate::catalog::{Orientation, PhotoColor};
use crate::search::SearchQuery;
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Filter flags shared by `browse` and `search`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Only photos with this orientation
    #[arg(short = 'o', long = "orientation", value_enum, default_value_t = Orientation::Any)]
    pub orientation: Orientation,

    /// Only photos with this dominant color
    #[arg(short = 'c', long = "color", value_enum)]
    pub color: Option<PhotoColor>,

    /// Only photos with more than 500 likes
    #[arg(short = 'p', long = "popular")]
    pub popular: bool,
}

impl FilterArgs {
    /// Build the query for `term` with these filters
    #[must_use]
    pub fn to_query(&self, term: impl Into<String>) -> SearchQuery {
        SearchQuery::new(term)
            .with_orientation(self.orientation)
            .with_color(self.color)
            .with_popular_only(self.popular)
    }
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., `per_page=20`)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., `download_dir`)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the path of the configuration file
    Path,
}

#[derive(Parser, Debug)]
#[command(name = "pixr")]
#[command(about = "Search and browse a remote photo catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Search term to start with
        #[arg(value_name = "TERM")]
        term: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Search the catalog and print the results
    #[command(visible_alias = "s")]
    Search {
        /// Search term
        #[arg(value_name = "TERM")]
        term: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Number of pages to fetch
        #[arg(long = "pages", value_name = "N", default_value_t = 1)]
        pages: u32,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show details for one photo
    #[command(visible_alias = "d")]
    Details {
        /// Photo id
        #[arg(value_name = "ID")]
        id: String,

        /// Print the record as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Download a photo to disk
    #[command(visible_alias = "dl")]
    Download {
        /// Photo id
        #[arg(value_name = "ID")]
        id: String,

        /// Target directory (defaults to the configured download directory)
        #[arg(short = 'd', long = "dir", value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Save the thumbnail instead of the full image
        #[arg(long = "thumbnail")]
        thumbnail: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command talks to the photo catalog
    #[must_use]
    pub const fn needs_catalog(&self) -> bool {
        matches!(
            self,
            Self::Browse { .. } | Self::Search { .. } | Self::Details { .. } | Self::Download { .. }
        )
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            term: None,
            filters: FilterArgs::default(),
        })
    }
}
