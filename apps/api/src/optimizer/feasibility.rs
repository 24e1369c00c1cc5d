//! Area feasibility filter with the approximate spacing deduction.
//!
//! Items are assumed to sit on a near-square grid: `cols = ⌈√n⌉`,
//! `rows = ⌈n / cols⌉`. The unusable margin is taken as the smaller of one
//! sheet-width per extra row and one sheet-height per extra column. This is a
//! crude bias against lopsided layouts, not a packing computation, and its
//! exact form decides which candidates survive.

use crate::optimizer::geometry::SheetGeometry;
use crate::optimizer::models::Product;

/// Areas of a combination that passed the filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub raw_area: f64,
    pub adjusted_area: f64,
}

/// Checks one combination against one sheet. `None` means rejected.
///
/// Rejects, in order: the empty combination, raw area over the sheet, and
/// spacing-adjusted area over the sheet.
pub fn check_feasibility(
    counts: &[u64],
    products: &[Product],
    sheet_area: f64,
    geometry: SheetGeometry,
) -> Option<Footprint> {
    let total_items = counts.iter().fold(0u64, |acc, &c| acc.saturating_add(c));
    if total_items == 0 {
        return None;
    }

    let raw_area: f64 = counts
        .iter()
        .zip(products)
        .map(|(&c, p)| c as f64 * p.area)
        .sum();
    if raw_area > sheet_area {
        return None;
    }

    let adjusted_area = raw_area + grid_spacing(total_items, geometry);
    if adjusted_area > sheet_area {
        return None;
    }

    Some(Footprint {
        raw_area,
        adjusted_area,
    })
}

/// Margin deduction for `total_items` laid out on a near-square grid.
pub(crate) fn grid_spacing(total_items: u64, geometry: SheetGeometry) -> f64 {
    let cols = ceil_sqrt(total_items);
    let rows = total_items.div_ceil(cols);
    let row_margin = (rows - 1) as f64 * geometry.width;
    let col_margin = (cols - 1) as f64 * geometry.height;
    row_margin.min(col_margin)
}

/// Smallest `c` with `c * c >= n`, for `n >= 1`.
fn ceil_sqrt(n: u64) -> u64 {
    let mut c = (n as f64).sqrt().ceil() as u64;
    while c.saturating_mul(c) < n {
        c += 1;
    }
    while c > 1 && (c - 1).saturating_mul(c - 1) >= n {
        c -= 1;
    }
    c.max(1)
}
