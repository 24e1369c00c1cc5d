//! Approximate sheet dimensions for the spacing heuristic.
//!
//! Known press and paper sizes resolve to their real width/height (inches,
//! areas in square inches). Any other area is treated as a square. The result
//! only feeds the margin deduction in `feasibility`; it is not a packing model.

// ────────────────────────────────────────────────────────────────────────────
// Known sheet table
// ────────────────────────────────────────────────────────────────────────────

/// `(area, width, height)` for the standard sheet sizes.
const KNOWN_SHEETS: [(f64, f64, f64); 10] = [
    (93.5, 8.5, 11.0),   // letter
    (187.0, 11.0, 17.0), // tabloid
    (216.0, 12.0, 18.0),
    (247.0, 13.0, 19.0),
    (374.0, 17.0, 22.0),
    (475.0, 19.0, 25.0),
    (520.0, 20.0, 26.0),
    (805.0, 23.0, 35.0),
    (950.0, 25.0, 38.0),
    (1120.0, 28.0, 40.0),
];

const AREA_TOLERANCE: f64 = 1e-9;

/// Width and height of a sheet, in the same length unit as √area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub width: f64,
    pub height: f64,
}

/// Resolves a sheet area to its approximate dimensions.
///
/// Exact table hit → table dimensions; otherwise `(√area, √area)`.
pub fn resolve_geometry(area: f64) -> SheetGeometry {
    KNOWN_SHEETS
        .iter()
        .find(|(known, _, _)| (known - area).abs() < AREA_TOLERANCE)
        .map(|&(_, width, height)| SheetGeometry { width, height })
        .unwrap_or_else(|| {
            let side = area.sqrt();
            SheetGeometry {
                width: side,
                height: side,
            }
        })
}
