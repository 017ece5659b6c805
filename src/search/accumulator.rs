//! Deduplicating result accumulator

use crate::catalog::Photo;
use std::collections::HashSet;

/// Counts reported by a single merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    /// Photos appended to the list
    pub added: usize,
    /// Photos dropped because their id was already present
    pub duplicates: usize,
}

/// Ordered list of photos with unique ids
///
/// Photos keep their first-seen position. A photo that reappears on a later
/// page (catalog pages can overlap while the index shifts) is dropped.
#[derive(Debug, Clone, Default)]
pub struct ResultAccumulator {
    photos: Vec<Photo>,
    seen: HashSet<String>,
}

impl ResultAccumulator {
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every photo whose id has not been seen yet
    pub fn merge(&mut self, incoming: impl IntoIterator<Item = Photo>) -> MergeStats {
        let mut stats = MergeStats::default();

        for photo in incoming {
            if self.seen.insert(photo.id.clone()) {
                self.photos.push(photo);
                stats.added += 1;
            } else {
                stats.duplicates += 1;
            }
        }

        stats
    }

    /// Read-only view of the accumulated photos
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Look up a photo by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Photo> {
        if !self.contains(id) {
            return None;
        }
        self.photos.iter().find(|p| p.id == id)
    }

    /// Position of a photo in the list
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        self.photos.iter().position(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(ids: &[&str]) -> Vec<Photo> {
        ids.iter().map(|id| Photo::new(*id, "t", "Ada")).collect()
    }

    fn ids(acc: &ResultAccumulator) -> Vec<&str> {
        acc.photos().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_merge_appends_in_arrival_order() {
        let mut acc = ResultAccumulator::new();
        let stats = acc.merge(photos(&["a", "b", "c"]));

        assert_eq!(stats, MergeStats { added: 3, duplicates: 0 });
        assert_eq!(ids(&acc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_overlapping_page_drops_duplicates() {
        let mut acc = ResultAccumulator::new();
        acc.merge(photos(&["a", "b", "c"]));
        let stats = acc.merge(photos(&["c", "d", "a", "e"]));

        assert_eq!(stats, MergeStats { added: 2, duplicates: 2 });
        assert_eq!(ids(&acc), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_duplicates_within_one_page() {
        let mut acc = ResultAccumulator::new();
        let stats = acc.merge(photos(&["a", "a", "b"]));

        assert_eq!(stats.added, 2);
        assert_eq!(stats.duplicates, 1);
    }

    #[test]
    fn test_ids_stay_unique_across_many_merges() {
        let mut acc = ResultAccumulator::new();
        for start in 0..20 {
            let page: Vec<Photo> = (start..start + 10)
                .map(|n| Photo::new(format!("p{n}"), "t", "Ada"))
                .collect();
            acc.merge(page);
        }

        let unique: HashSet<&str> = acc.photos().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(unique.len(), acc.len());
        assert_eq!(acc.len(), 29);
    }

    #[test]
    fn test_lookup() {
        let mut acc = ResultAccumulator::new();
        acc.merge(photos(&["a", "b"]));

        assert_eq!(acc.get("b").map(|p| p.id.as_str()), Some("b"));
        assert_eq!(acc.position("b"), Some(1));
        assert!(acc.get("zz").is_none());
        assert!(acc.position("zz").is_none());
    }
}
