//! Per-category accumulation of leaf classifications.

use std::collections::BTreeMap;

use crate::model::Category;
use crate::walk::Classification;

/// Covered and not-covered field paths for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTally {
    /// Field path to number of records in which it had content.
    pub covered: BTreeMap<String, u64>,
    /// Field paths seen empty at least once. Values stay at zero.
    pub not_covered: BTreeMap<String, u64>,
}

impl CategoryTally {
    /// Number of distinct paths across both mappings, counted per mapping.
    #[must_use]
    pub fn total(&self) -> usize {
        self.covered.len() + self.not_covered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Coverage state for a whole run. Created once, only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageTally {
    categories: [CategoryTally; 3],
}

impl CoverageTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_covered(&mut self, category: Category, path: &str) {
        let covered = &mut self.categories[category.index()].covered;
        *covered.entry(path.to_string()).or_insert(0) += 1;
    }

    pub fn record_not_covered(&mut self, category: Category, path: &str) {
        self.categories[category.index()]
            .not_covered
            .entry(path.to_string())
            .or_insert(0);
    }

    pub fn record(&mut self, category: Category, path: &str, classification: Classification) {
        match classification {
            Classification::Covered => self.record_covered(category, path),
            Classification::NotCovered => self.record_not_covered(category, path),
        }
    }

    #[must_use]
    pub fn category(&self, category: Category) -> &CategoryTally {
        &self.categories[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_covered_counts_occurrences() {
        let mut tally = CoverageTally::new();
        tally.record_covered(Category::Service, "service.Name");
        tally.record_covered(Category::Service, "service.Name");
        tally.record_covered(Category::Service, "service.Spec.Generation");

        let service = tally.category(Category::Service);
        assert_eq!(service.covered["service.Name"], 2);
        assert_eq!(service.covered["service.Spec.Generation"], 1);
        assert!(service.not_covered.is_empty());
    }

    #[test]
    fn test_record_not_covered_stays_at_zero() {
        let mut tally = CoverageTally::new();
        for _ in 0..3 {
            tally.record_not_covered(Category::Route, "route.Count");
        }
        assert_eq!(tally.category(Category::Route).not_covered["route.Count"], 0);
        assert_eq!(tally.category(Category::Route).total(), 1);
    }

    #[test]
    fn test_categories_are_independent() {
        let mut tally = CoverageTally::new();
        tally.record(Category::Route, "route.Name", Classification::Covered);
        tally.record(Category::Configuration, "configuration.Name", Classification::NotCovered);

        assert_eq!(tally.category(Category::Route).total(), 1);
        assert_eq!(tally.category(Category::Configuration).total(), 1);
        assert!(tally.category(Category::Service).is_empty());
    }

    #[test]
    fn test_path_may_be_both_covered_and_not_covered() {
        let mut tally = CoverageTally::new();
        tally.record(Category::Route, "route.Name", Classification::NotCovered);
        tally.record(Category::Route, "route.Name", Classification::Covered);

        let route = tally.category(Category::Route);
        assert_eq!(route.covered["route.Name"], 1);
        assert_eq!(route.not_covered["route.Name"], 0);
        assert_eq!(route.total(), 2);
    }

    #[test]
    fn test_covered_counts_never_decrease() {
        let mut tally = CoverageTally::new();
        let mut last = 0;
        for class in [
            Classification::Covered,
            Classification::NotCovered,
            Classification::Covered,
            Classification::NotCovered,
        ] {
            tally.record(Category::Route, "route.Name", class);
            let now = tally
                .category(Category::Route)
                .covered
                .get("route.Name")
                .copied()
                .unwrap_or(0);
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 2);
    }
}
