//! Remote photo catalog
//!
//! Everything the rest of the crate knows about the remote side lives here:
//! the record types, the client trait, the error taxonomy, and the
//! concrete HTTP client.
//!
//! # Architecture
//!
//! ```text
//! SearchController ──► PhotoCatalogClient (trait)
//!                             ▲
//!                 ┌───────────┴────────────┐
//!          CachedCatalog<C>          ScriptedCatalog (tests)
//!                 │
//!          UnsplashClient (reqwest)
//! ```

mod cached;
mod error;
mod traits;
mod types;

pub mod unsplash;

pub use cached::CachedCatalog;
pub use error::CatalogError;
pub use traits::PhotoCatalogClient;
pub use types::{Orientation, Photo, PhotoColor, PhotoDetails, ResultPage, SearchRequest};
pub use unsplash::UnsplashClient;
