//! Search, pagination and result accumulation
//!
//! # Architecture
//!
//! - **`SearchQuery`**: immutable description of what was asked for
//! - **`ResultAccumulator`**: ordered, id-deduplicated photo list
//! - **`SearchSession`**: one query's results, page cursor, single-flight
//!   flag and generation
//! - **`PaginationTrigger`**: decides whether a near-end signal fetches
//! - **`SearchController`**: owns the session and replaces it on every submit
//!
//! # Example
//!
//! ```ignore
//! use pixr::search::SearchController;
//!
//! let mut controller = SearchController::default();
//! controller.submit_search("mountains");
//! controller.fetch_next_page(&client).await?;
//!
//! // later, as the user scrolls
//! controller.load_more(&client, rows_left).await?;
//! ```

mod accumulator;
mod controller;
pub mod error;
mod pagination;
mod query;
mod session;

pub use accumulator::{MergeStats, ResultAccumulator};
pub use controller::SearchController;
pub use error::FetchError;
pub use pagination::{DEFAULT_NEAR_END_THRESHOLD, DEFAULT_RESULT_CAP, PaginationTrigger, TriggerDecision};
pub use query::SearchQuery;
pub use session::{FetchOutcome, FetchTicket, MergeSummary, SearchSession};
