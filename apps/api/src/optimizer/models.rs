//! Record types shared by the search stages.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::optimizer::scoring::Score;

/// A validated product: unique non-empty name, strictly positive area.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub area: f64,
    pub quantity: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, area: f64, quantity: u64) -> Self {
        Self {
            name: name.into(),
            area,
            quantity,
        }
    }
}

/// Area of a candidate sheet. Always finite and positive once validated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SheetSize(f64);

impl SheetSize {
    /// Returns `None` for non-finite or non-positive areas.
    pub fn new(area: f64) -> Option<Self> {
        (area.is_finite() && area > 0.0).then_some(Self(area))
    }

    pub fn area(self) -> f64 {
        self.0
    }
}

/// Validated input for one optimizer invocation. Immutable for the duration of the search.
#[derive(Debug, Clone)]
pub struct Problem {
    pub products: Vec<Product>,
    pub sheet_sizes: Vec<SheetSize>,
}

impl Problem {
    /// Largest sheet area. Every combination bound is derived from it, for all sheets.
    pub fn max_sheet_area(&self) -> f64 {
        self.sheet_sizes
            .iter()
            .map(|s| s.area())
            .fold(0.0_f64, f64::max)
    }
}

/// Copies of each product placed on a single sheet, in input product order.
///
/// Serializes as a JSON object keyed by product name, preserving that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    entries: Vec<(String, u64)>,
}

impl Layout {
    pub fn from_counts(products: &[Product], counts: &[u64]) -> Self {
        Self {
            entries: products
                .iter()
                .zip(counts)
                .map(|(p, &c)| (p.name.clone(), c))
                .collect(),
        }
    }

    pub fn count(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c).sum()
    }
}

impl Serialize for Layout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// A scored, feasible combination for one sheet size.
///
/// Only the running best is ever retained; everything else is dropped as soon
/// as it loses a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Position of the sheet size in the input list. Tertiary tie-break.
    pub sheet_index: usize,
    pub sheet_size: SheetSize,
    pub counts: Vec<u64>,
    pub raw_area: f64,
    pub adjusted_area: f64,
    pub score: Score,
}

/// The globally best layout, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestLayout {
    pub sheet_size: f64,
    pub layout: Layout,
    /// Spacing-adjusted area used on one sheet.
    pub total_area_per_sheet: f64,
    pub raw_area_per_sheet: f64,
    pub sheets_needed: u64,
    pub overprint: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_size_rejects_non_positive_and_non_finite() {
        assert!(SheetSize::new(0.0).is_none());
        assert!(SheetSize::new(-5.0).is_none());
        assert!(SheetSize::new(f64::NAN).is_none());
        assert!(SheetSize::new(f64::INFINITY).is_none());
        assert_eq!(SheetSize::new(100.0).map(SheetSize::area), Some(100.0));
    }

    #[test]
    fn test_layout_serializes_in_product_order() {
        let products = vec![
            Product::new("zeta", 10.0, 1),
            Product::new("alpha", 5.0, 1),
        ];
        let layout = Layout::from_counts(&products, &[3, 1]);
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(json, r#"{"zeta":3,"alpha":1}"#);
        assert_eq!(layout.count("alpha"), Some(1));
        assert_eq!(layout.count("missing"), None);
        assert_eq!(layout.total_items(), 4);
    }

    #[test]
    fn test_max_sheet_area_picks_largest() {
        let problem = Problem {
            products: vec![Product::new("a", 1.0, 1)],
            sheet_sizes: [187.0, 950.0, 216.0]
                .into_iter()
                .filter_map(SheetSize::new)
                .collect(),
        };
        assert_eq!(problem.max_sheet_area(), 950.0);
    }
}
