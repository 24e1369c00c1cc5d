//! Yield scoring: sheets needed and overprint for a fixed layout.

use crate::optimizer::models::Product;

/// Print runs needed for a layout.
///
/// `Unbounded` is produced when some product has zero copies on the sheet, so
/// no number of runs can satisfy it. Variant order makes every `Finite` value
/// compare less than `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SheetsNeeded {
    Finite(u64),
    Unbounded,
}

impl SheetsNeeded {
    pub fn finite(self) -> Option<u64> {
        match self {
            SheetsNeeded::Finite(n) => Some(n),
            SheetsNeeded::Unbounded => None,
        }
    }
}

/// Lexicographic ranking key: fewer sheets first, then less overprint.
///
/// `overprint` is always 0 for an `Unbounded` score; it carries no meaning there.
/// It is kept in `u128` so that any `u64` count times any `u64` sheet count
/// is representable and scoring itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    pub sheets_needed: SheetsNeeded,
    pub overprint: u128,
}

/// Scores a feasible layout against the requested quantities.
///
/// `sheets_needed = max_p ⌈quantity[p] / count[p]⌉`, Unbounded if any count is 0.
/// `overprint = Σ_p max(0, count[p] × sheets_needed − quantity[p])`.
pub fn score_layout(counts: &[u64], products: &[Product]) -> Score {
    let mut sheets = 0u64;
    for (&count, product) in counts.iter().zip(products) {
        if count == 0 {
            return Score {
                sheets_needed: SheetsNeeded::Unbounded,
                overprint: 0,
            };
        }
        sheets = sheets.max(product.quantity.div_ceil(count));
    }

    let overprint = counts
        .iter()
        .zip(products)
        .map(|(&count, product)| {
            let printed = u128::from(count) * u128::from(sheets);
            printed.saturating_sub(u128::from(product.quantity))
        })
        .fold(0u128, u128::saturating_add);

    Score {
        sheets_needed: SheetsNeeded::Finite(sheets),
        overprint,
    }
}
