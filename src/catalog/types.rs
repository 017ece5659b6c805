//! Catalog data types
//!
//! These types describe what the remote catalog hands back and what the
//! search layer sends to it. They are transport-agnostic: the Unsplash
//! client maps its wire format onto them, and tests build them directly.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single photo record as returned by a catalog search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Catalog-wide unique identifier
    pub id: String,
    /// Small rendition used in result lists
    pub thumbnail_url: String,
    /// Full-resolution rendition, when the catalog exposes one
    #[serde(default)]
    pub full_url: Option<String>,
    /// Display name of the photographer
    pub author_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: Option<u64>,
    /// Dominant color as a hex string (e.g. `#60544D`)
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Photo {
    /// Create a photo with only the required fields set
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        thumbnail_url: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            thumbnail_url: thumbnail_url.into(),
            full_url: None,
            author_name: author_name.into(),
            description: None,
            created_at: None,
            updated_at: None,
            likes: None,
            color: None,
            width: None,
            height: None,
        }
    }

    /// Set the like count
    #[must_use]
    pub const fn with_likes(mut self, likes: u64) -> Self {
        self.likes = Some(likes);
        self
    }

    /// Set width and height in pixels
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the full-resolution URL
    #[must_use]
    pub fn with_full_url(mut self, url: impl Into<String>) -> Self {
        self.full_url = Some(url.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description text, or a placeholder when the catalog has none
    #[must_use]
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description")
    }

    /// Dimensions formatted as `WxH`, if both are known
    #[must_use]
    pub fn dimensions_label(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{w}x{h}")),
            _ => None,
        }
    }
}

/// Extended photo record returned by a detail lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoDetails {
    /// The base record (same shape as in search results)
    #[serde(flatten)]
    pub photo: Photo,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub views: Option<u64>,
    /// Human-readable location name
    #[serde(default)]
    pub location: Option<String>,
    /// Camera make and model from EXIF data
    #[serde(default)]
    pub camera: Option<String>,
    /// Link to the photo's page on the catalog website
    #[serde(default)]
    pub page_url: Option<String>,
}

impl From<Photo> for PhotoDetails {
    fn from(photo: Photo) -> Self {
        Self {
            photo,
            downloads: None,
            views: None,
            location: None,
            camera: None,
            page_url: None,
        }
    }
}

/// One page of catalog search results
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPage {
    /// Photos in catalog order
    pub photos: Vec<Photo>,
    /// Total number of matches the catalog reports for the query
    pub total_available: u64,
    /// 1-based page number this response corresponds to
    pub page_number: u32,
    /// Number of pages the catalog reports, if known
    pub total_pages: Option<u32>,
}

/// Orientation constraint for a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// No orientation constraint
    #[default]
    Any,
    /// Taller than wide
    Portrait,
    /// Wider than tall
    Landscape,
}

impl Orientation {
    /// Value sent to the catalog, or `None` when unconstrained
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Portrait => Some("portrait"),
            Self::Landscape => Some("landscape"),
        }
    }

    /// Next value in the `Any → Portrait → Landscape` cycle
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Any => Self::Portrait,
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Any,
        }
    }

    /// Short label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Color filter understood by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PhotoColor {
    BlackAndWhite,
    Black,
    White,
    Yellow,
    Orange,
    Red,
    Purple,
    Magenta,
    Green,
    Teal,
    Blue,
}

impl PhotoColor {
    /// All colors in display order
    pub const ALL: [Self; 11] = [
        Self::BlackAndWhite,
        Self::Black,
        Self::White,
        Self::Yellow,
        Self::Orange,
        Self::Red,
        Self::Purple,
        Self::Magenta,
        Self::Green,
        Self::Teal,
        Self::Blue,
    ];

    /// Value sent to the catalog
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::BlackAndWhite => "black_and_white",
            Self::Black => "black",
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Magenta => "magenta",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
        }
    }

    /// Step through `None → first color → … → last color → None`
    #[must_use]
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::ALL[0]),
            Some(color) => {
                let idx = Self::ALL.iter().position(|c| *c == color).unwrap_or(0);
                Self::ALL.get(idx + 1).copied()
            }
        }
    }
}

impl fmt::Display for PhotoColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for PhotoColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_param() == normalized)
            .ok_or_else(|| format!("Unknown color '{s}'"))
    }
}

/// Parameters for one catalog search call
///
/// `term`, `orientation` and `color` are evaluated by the catalog itself;
/// the page is the 1-based cursor owned by the search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub page: u32,
    pub orientation: Orientation,
    pub color: Option<PhotoColor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_param() {
        assert_eq!(Orientation::Any.as_param(), None);
        assert_eq!(Orientation::Portrait.as_param(), Some("portrait"));
        assert_eq!(Orientation::Landscape.as_param(), Some("landscape"));
    }

    #[test]
    fn test_orientation_cycle_wraps() {
        let start = Orientation::Any;
        assert_eq!(start.cycle().cycle().cycle(), start);
    }

    #[test]
    fn test_color_from_str_accepts_variants() {
        assert_eq!("teal".parse::<PhotoColor>(), Ok(PhotoColor::Teal));
        assert_eq!(
            "black-and-white".parse::<PhotoColor>(),
            Ok(PhotoColor::BlackAndWhite)
        );
        assert_eq!("Blue".parse::<PhotoColor>(), Ok(PhotoColor::Blue));
        assert!("chartreuse".parse::<PhotoColor>().is_err());
    }

    #[test]
    fn test_color_cycle_ends_with_none() {
        let mut current = None;
        for _ in 0..PhotoColor::ALL.len() {
            current = PhotoColor::cycle(current);
            assert!(current.is_some());
        }
        assert_eq!(PhotoColor::cycle(current), None);
    }

    #[test]
    fn test_description_placeholder() {
        let photo = Photo::new("p1", "https://img/p1", "Ada");
        assert_eq!(photo.description_or_default(), "No description");

        let photo = photo.with_description("  ");
        assert_eq!(photo.description_or_default(), "No description");
    }

    #[test]
    fn test_dimensions_label() {
        let photo = Photo::new("p1", "https://img/p1", "Ada");
        assert_eq!(photo.dimensions_label(), None);
        assert_eq!(
            photo.with_dimensions(4000, 3000).dimensions_label().as_deref(),
            Some("4000x3000")
        );
    }
}
