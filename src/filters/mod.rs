//! Client-side photo filters
//!
//! The catalog evaluates the search term and color server-side. What it
//! cannot evaluate reliably is applied here, on every incoming page, before
//! the page is merged into the session:
//!
//! - **popular only**: keep photos with more than [`POPULAR_LIKES_THRESHOLD`] likes
//! - **orientation**: keep photos whose known dimensions match
//!
//! Every rule is a pure, order-preserving predicate, so applying the
//! pipeline twice with the same query yields the same result as applying it
//! once.
//!
//! # Examples
//!
//! ```
//! use pixr::catalog::{Orientation, Photo};
//! use pixr::filters::FilterPipeline;
//! use pixr::search::SearchQuery;
//!
//! let query = SearchQuery::new("cat").with_orientation(Orientation::Landscape);
//! let photos = vec![
//!     Photo::new("wide", "t", "Ada").with_dimensions(1600, 900),
//!     Photo::new("tall", "t", "Ada").with_dimensions(900, 1600),
//! ];
//!
//! let kept = FilterPipeline::apply(&query, photos);
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].id, "wide");
//! ```

mod pipeline;

pub use pipeline::{
    FilterPipeline, PhotoFilterExt, POPULAR_LIKES_THRESHOLD, is_popular, matches_orientation,
};
