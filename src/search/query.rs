//! Search query value

use crate::catalog::{Orientation, PhotoColor, SearchRequest};
use serde::{Deserialize, Serialize};

/// What the user asked for
///
/// Immutable once submitted: a new search or a filter change builds a new
/// query value and a new session around it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Keyword sent to the catalog
    pub term: String,
    /// Sent to the catalog and re-checked locally against photo dimensions
    #[serde(default)]
    pub orientation: Orientation,
    /// Sent to the catalog only
    #[serde(default)]
    pub color: Option<PhotoColor>,
    /// Applied locally
    #[serde(default)]
    pub popular_only: bool,
}

impl SearchQuery {
    /// Create a query for `term` with no filters
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// Same filters, different term
    #[must_use]
    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..self.clone()
        }
    }

    /// Set the orientation constraint
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set or clear the color constraint
    #[must_use]
    pub const fn with_color(mut self, color: Option<PhotoColor>) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable the popularity rule
    #[must_use]
    pub const fn with_popular_only(mut self, popular_only: bool) -> Self {
        self.popular_only = popular_only;
        self
    }

    /// Whether any filter beyond the term is active
    #[must_use]
    pub const fn has_filters(&self) -> bool {
        !matches!(self.orientation, Orientation::Any) || self.color.is_some() || self.popular_only
    }

    /// Build the catalog request for `page`
    #[must_use]
    pub fn request(&self, page: u32) -> SearchRequest {
        SearchRequest {
            term: self.term.clone(),
            page,
            orientation: self.orientation,
            color: self.color,
        }
    }

    /// Short human-readable summary of the active filters
    #[must_use]
    pub fn filter_summary(&self) -> String {
        let mut parts = Vec::new();
        if self.orientation != Orientation::Any {
            parts.push(format!("orientation={}", self.orientation));
        }
        if let Some(color) = self.color {
            parts.push(format!("color={color}"));
        }
        if self.popular_only {
            parts.push("popular".to_string());
        }
        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}
