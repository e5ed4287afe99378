//! Per-invocation stage counters.

use serde::Serialize;
use std::ops::AddAssign;

/// Counts accumulated across the pipeline stages.
///
/// A fresh value is created for every pipeline run. Stages only ever add to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageCounters {
    /// Comment spans removed
    pub comments: usize,
    /// Script and noscript elements removed
    pub scripts: usize,
    /// Tracking-pixel images removed
    pub tracking_pixels: usize,
    /// Style blocks plus inline style/class attributes removed
    pub styles: usize,
    /// Empty element pairs pruned
    pub empty_tags: usize,
    /// Tables flattened to bulleted lines
    pub tables: usize,
    /// Lists converted
    pub lists: usize,
    /// Headings converted
    pub headings: usize,
    /// Links converted
    pub links: usize,
    /// Images converted to inline markers
    pub images: usize,
}

impl StageCounters {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the removal subset of the counters.
    pub fn removed(&self) -> RemovedCounts {
        RemovedCounts {
            comments: self.comments,
            scripts: self.scripts,
            tracking_pixels: self.tracking_pixels,
            empty_tags: self.empty_tags,
            styles: self.styles,
        }
    }

    /// Returns the structural conversion subset of the counters.
    pub fn converted(&self) -> ConvertedCounts {
        ConvertedCounts {
            tables: self.tables,
            lists: self.lists,
            headings: self.headings,
            links: self.links,
        }
    }
}

impl AddAssign for StageCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.comments += rhs.comments;
        self.scripts += rhs.scripts;
        self.tracking_pixels += rhs.tracking_pixels;
        self.styles += rhs.styles;
        self.empty_tags += rhs.empty_tags;
        self.tables += rhs.tables;
        self.lists += rhs.lists;
        self.headings += rhs.headings;
        self.links += rhs.links;
        self.images += rhs.images;
    }
}

/// Elements removed by the stripping and pruning stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemovedCounts {
    /// Comment spans
    pub comments: usize,
    /// Script and noscript elements
    pub scripts: usize,
    /// Tracking-pixel images
    pub tracking_pixels: usize,
    /// Empty element pairs
    pub empty_tags: usize,
    /// Style blocks plus inline style/class attributes
    pub styles: usize,
}

impl RemovedCounts {
    /// Sum of all removal counts.
    pub fn total(&self) -> usize {
        self.comments + self.scripts + self.tracking_pixels + self.empty_tags + self.styles
    }
}

/// Elements converted by the structural stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConvertedCounts {
    /// Tables flattened to bulleted lines
    pub tables: usize,
    /// Ordered and unordered lists
    pub lists: usize,
    /// Headings of any level
    pub headings: usize,
    /// Links with text and an href
    pub links: usize,
}

impl ConvertedCounts {
    /// Sum of all conversion counts.
    pub fn total(&self) -> usize {
        self.tables + self.lists + self.headings + self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let counters = StageCounters::new();
        assert_eq!(counters.removed().total(), 0);
        assert_eq!(counters.converted().total(), 0);
        assert_eq!(counters.images, 0);
    }

    #[test]
    fn test_subsets() {
        let counters = StageCounters {
            comments: 1,
            scripts: 2,
            tracking_pixels: 3,
            styles: 4,
            empty_tags: 5,
            tables: 6,
            lists: 7,
            headings: 8,
            links: 9,
            images: 10,
        };
        assert_eq!(counters.removed().total(), 15);
        assert_eq!(counters.converted().total(), 30);
        assert_eq!(counters.removed().styles, 4);
        assert_eq!(counters.converted().links, 9);
    }

    #[test]
    fn test_add_assign() {
        let mut total = StageCounters::new();
        total += StageCounters {
            tables: 1,
            ..Default::default()
        };
        total += StageCounters {
            tables: 2,
            links: 1,
            ..Default::default()
        };
        assert_eq!(total.tables, 3);
        assert_eq!(total.links, 1);
    }
}
