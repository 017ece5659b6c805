//! Filter predicates and the pipeline that composes them
//!
//! # Iterator Adapters
//!
//! [`PhotoFilterExt`] adds the individual rules as chainable iterator
//! adapters:
//!
//! ```ignore
//! use pixr::filters::PhotoFilterExt;
//!
//! let kept: Vec<_> = photos
//!     .into_iter()
//!     .popular_only(true)
//!     .with_orientation(Orientation::Portrait)
//!     .collect();
//! ```

use crate::catalog::{Orientation, Photo};
use crate::search::SearchQuery;

/// Photos need strictly more likes than this to count as popular
pub const POPULAR_LIKES_THRESHOLD: u64 = 500;

/// Whether a photo passes the popularity rule
///
/// Photos with an unknown like count never do.
#[must_use]
pub fn is_popular(photo: &Photo) -> bool {
    photo.likes.is_some_and(|likes| likes > POPULAR_LIKES_THRESHOLD)
}

/// Whether a photo passes the orientation rule
///
/// `Any` accepts everything. `Portrait` and `Landscape` require both
/// dimensions to be known; square photos match neither.
#[must_use]
pub fn matches_orientation(orientation: Orientation, photo: &Photo) -> bool {
    match orientation {
        Orientation::Any => true,
        Orientation::Portrait => {
            matches!((photo.width, photo.height), (Some(w), Some(h)) if h > w)
        }
        Orientation::Landscape => {
            matches!((photo.width, photo.height), (Some(w), Some(h)) if w > h)
        }
    }
}

/// Iterator extension adding the filter rules as adapters
pub trait PhotoFilterExt: Iterator<Item = Photo> + Sized {
    /// Keep only popular photos when `enabled` is true
    fn popular_only(self, enabled: bool) -> impl Iterator<Item = Photo> {
        self.filter(move |photo| !enabled || is_popular(photo))
    }

    /// Keep only photos matching `orientation`
    fn with_orientation(self, orientation: Orientation) -> impl Iterator<Item = Photo> {
        self.filter(move |photo| matches_orientation(orientation, photo))
    }
}

impl<I: Iterator<Item = Photo>> PhotoFilterExt for I {}

/// The client-side filter stage applied to each incoming page
pub struct FilterPipeline;

impl FilterPipeline {
    /// Apply every client-side rule of `query` to `photos`
    ///
    /// The term and color are ignored here; the catalog already applied
    /// them. Order is preserved.
    #[must_use]
    pub fn apply(query: &SearchQuery, photos: Vec<Photo>) -> Vec<Photo> {
        photos
            .into_iter()
            .popular_only(query.popular_only)
            .with_orientation(query.orientation)
            .collect()
    }

    /// Whether a single photo survives the pipeline
    #[must_use]
    pub fn accepts(query: &SearchQuery, photo: &Photo) -> bool {
        (!query.popular_only || is_popular(photo)) && matches_orientation(query.orientation, photo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PhotoColor;

    fn photo(id: &str) -> Photo {
        Photo::new(id, format!("https://img/{id}"), "Ada")
    }

    fn sample() -> Vec<Photo> {
        vec![
            photo("wide-popular").with_dimensions(1600, 900).with_likes(900),
            photo("tall-popular").with_dimensions(900, 1600).with_likes(501),
            photo("wide-quiet").with_dimensions(1600, 900).with_likes(500),
            photo("square").with_dimensions(1000, 1000).with_likes(2000),
            photo("unknown-size").with_likes(700),
            photo("unknown-likes").with_dimensions(900, 1600),
        ]
    }

    fn ids(photos: &[Photo]) -> Vec<&str> {
        photos.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_no_rules_is_noop() {
        let query = SearchQuery::new("cat");
        let kept = FilterPipeline::apply(&query, sample());
        assert_eq!(kept, sample());
    }

    #[test]
    fn test_popular_only_is_strictly_greater() {
        let query = SearchQuery::new("cat").with_popular_only(true);
        let kept = FilterPipeline::apply(&query, sample());
        assert_eq!(
            ids(&kept),
            vec!["wide-popular", "tall-popular", "square", "unknown-size"]
        );
    }

    #[test]
    fn test_portrait_requires_both_dimensions() {
        let query = SearchQuery::new("cat").with_orientation(Orientation::Portrait);
        let kept = FilterPipeline::apply(&query, sample());
        assert_eq!(ids(&kept), vec!["tall-popular", "unknown-likes"]);
    }

    #[test]
    fn test_landscape_excludes_square() {
        let query = SearchQuery::new("cat").with_orientation(Orientation::Landscape);
        let kept = FilterPipeline::apply(&query, sample());
        assert_eq!(ids(&kept), vec!["wide-popular", "wide-quiet"]);
    }

    #[test]
    fn test_rules_combine() {
        let query = SearchQuery::new("cat")
            .with_orientation(Orientation::Landscape)
            .with_popular_only(true);
        let kept = FilterPipeline::apply(&query, sample());
        assert_eq!(ids(&kept), vec!["wide-popular"]);
    }

    #[test]
    fn test_term_and_color_not_applied_locally() {
        let query = SearchQuery::new("something else entirely").with_color(Some(PhotoColor::Red));
        let kept = FilterPipeline::apply(&query, sample());
        assert_eq!(kept.len(), sample().len());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let queries = [
            SearchQuery::new("cat"),
            SearchQuery::new("cat").with_popular_only(true),
            SearchQuery::new("cat").with_orientation(Orientation::Portrait),
            SearchQuery::new("cat")
                .with_orientation(Orientation::Landscape)
                .with_popular_only(true),
        ];

        for query in &queries {
            let once = FilterPipeline::apply(query, sample());
            let twice = FilterPipeline::apply(query, once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_accepts_agrees_with_apply() {
        let query = SearchQuery::new("cat")
            .with_orientation(Orientation::Portrait)
            .with_popular_only(true);
        let kept = FilterPipeline::apply(&query, sample());
        let accepted: Vec<Photo> = sample()
            .into_iter()
            .filter(|p| FilterPipeline::accepts(&query, p))
            .collect();
        assert_eq!(kept, accepted);
    }
}
