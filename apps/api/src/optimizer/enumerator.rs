//! Lazy enumeration of per-product count combinations.
//!
//! The space is the Cartesian product of `0..=max_count[p]` over all products,
//! where `max_count[p] = floor(max_sheet_area / area[p]) + 1`. Its size is the
//! product of `(max_count[p] + 1)`, which grows multiplicatively with the
//! number of products, so it is never materialized: callers walk it with a
//! [`Combinations`] cursor and must check [`LayoutSpace::len`] against their
//! budget first.
//!
//! Order: nested ascending counts in product order, last product fastest.
//! Selection breaks ties by first-seen, so this order is observable.

use crate::optimizer::models::Product;

/// Bounds of the combination space. Independent of the sheet being evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSpace {
    bounds: Vec<u64>,
}

impl LayoutSpace {
    /// Computes per-product upper bounds from the largest sheet area.
    ///
    /// Products must already be validated (`area > 0`).
    pub fn new(products: &[Product], max_sheet_area: f64) -> Self {
        let bounds = products
            .iter()
            .map(|p| {
                // `as` saturates, so an absurdly small area yields u64::MAX
                // and the space size check rejects it.
                let per_sheet = (max_sheet_area / p.area).floor() as u64;
                per_sheet.saturating_add(1)
            })
            .collect();
        Self { bounds }
    }

    /// Inclusive upper bound per product.
    pub fn bounds(&self) -> &[u64] {
        &self.bounds
    }

    /// Number of combinations, or `None` if it does not fit in a `u64`.
    pub fn len(&self) -> Option<u64> {
        self.bounds
            .iter()
            .try_fold(1u64, |acc, &b| acc.checked_mul(b.checked_add(1)?))
    }

    /// A fresh cursor at the first combination (all zeros).
    pub fn iter(&self) -> Combinations<'_> {
        Combinations {
            bounds: &self.bounds,
            current: vec![0; self.bounds.len()],
            started: false,
            exhausted: false,
        }
    }
}

/// Odometer-style cursor over a [`LayoutSpace`].
///
/// `next_combination` lends a slice into an internal buffer and allocates
/// nothing per step; the `Iterator` impl clones it for convenience.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    bounds: &'a [u64],
    current: Vec<u64>,
    started: bool,
    exhausted: bool,
}

impl Combinations<'_> {
    pub fn next_combination(&mut self) -> Option<&[u64]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.current);
        }
        for i in (0..self.current.len()).rev() {
            if self.current[i] < self.bounds[i] {
                self.current[i] += 1;
                return Some(&self.current);
            }
            self.current[i] = 0;
        }
        self.exhausted = true;
        None
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_combination().map(<[u64]>::to_vec)
    }
}
