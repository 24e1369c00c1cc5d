//! Search orchestration: enumerate → filter → score → select, per sheet, then reduce.
//!
//! # Budget
//! The space size times the number of sheets is checked against
//! `SearchLimits::max_combinations` before anything is enumerated. An
//! oversized search is refused with `SearchSpaceTooLarge`; it is never
//! truncated.
//!
//! # Parallelism
//! With `parallel` set, sheet sizes are searched on the rayon pool. Each
//! per-sheet scan is still sequential and the reduction keys on
//! `(score, sheet_index)`, so the output is identical to the sequential path.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::optimizer::cancel::{CancelToken, CANCEL_CHECK_INTERVAL};
use crate::optimizer::enumerator::LayoutSpace;
use crate::optimizer::error::OptimizeError;
use crate::optimizer::feasibility::check_feasibility;
use crate::optimizer::geometry::resolve_geometry;
use crate::optimizer::models::{BestLayout, Candidate, Layout, Problem, Product};
use crate::optimizer::scoring::score_layout;
use crate::optimizer::selection::{select_global, BestTracker};
use crate::optimizer::validation::build_problem;

pub const DEFAULT_MAX_COMBINATIONS: u64 = 20_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLimits {
    /// Ceiling on `space size × sheet count`.
    pub max_combinations: u64,
    /// Search sheet sizes concurrently.
    pub parallel: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub combinations_examined: u64,
    pub feasible_candidates: u64,
    pub sheets_evaluated: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub best: BestLayout,
    pub stats: SearchStats,
}

/// Finds the best layout with default limits and no deadline.
pub fn optimize(products: Vec<Product>, sheet_sizes: &[f64]) -> Result<BestLayout, OptimizeError> {
    let problem = build_problem(products, sheet_sizes)?;
    optimize_with(&problem, &SearchLimits::default(), &CancelToken::new()).map(|o| o.best)
}

/// Runs the full search over a validated problem.
pub fn optimize_with(
    problem: &Problem,
    limits: &SearchLimits,
    cancel: &CancelToken,
) -> Result<SearchOutcome, OptimizeError> {
    let space = LayoutSpace::new(&problem.products, problem.max_sheet_area());
    enforce_budget(&space, problem.sheet_sizes.len(), limits.max_combinations)?;
    cancel.check()?;

    let sheets: Vec<SheetSearch> = if limits.parallel {
        (0..problem.sheet_sizes.len())
            .into_par_iter()
            .map(|i| search_sheet(problem, &space, i, cancel))
            .collect::<Result<_, _>>()?
    } else {
        (0..problem.sheet_sizes.len())
            .map(|i| search_sheet(problem, &space, i, cancel))
            .collect::<Result<_, _>>()?
    };

    let stats = SearchStats {
        combinations_examined: sheets.iter().map(|s| s.examined).sum(),
        feasible_candidates: sheets.iter().map(|s| s.feasible).sum(),
        sheets_evaluated: sheets.len(),
    };

    let winner = select_global(sheets.into_iter().filter_map(|s| s.best));
    info!(
        examined = stats.combinations_examined,
        feasible = stats.feasible_candidates,
        sheets = stats.sheets_evaluated,
        elapsed_ms = cancel.elapsed().as_millis() as u64,
        "Layout search finished"
    );

    let winner = winner.ok_or(OptimizeError::Infeasible)?;
    // Every surviving layout leaves some product off the sheet.
    let sheets_needed = winner
        .score
        .sheets_needed
        .finite()
        .ok_or(OptimizeError::Infeasible)?;
    let overprint = u64::try_from(winner.score.overprint).map_err(|_| {
        OptimizeError::Internal(format!(
            "overprint {} of the best layout exceeds u64",
            winner.score.overprint
        ))
    })?;

    Ok(SearchOutcome {
        best: BestLayout {
            sheet_size: winner.sheet_size.area(),
            layout: Layout::from_counts(&problem.products, &winner.counts),
            total_area_per_sheet: winner.adjusted_area,
            raw_area_per_sheet: winner.raw_area,
            sheets_needed,
            overprint,
        },
        stats,
    })
}

fn enforce_budget(space: &LayoutSpace, sheet_count: usize, limit: u64) -> Result<(), OptimizeError> {
    let total = space
        .len()
        .and_then(|n| n.checked_mul(sheet_count as u64));
    match total {
        Some(combinations) if combinations <= limit => Ok(()),
        other => {
            let combinations = other.unwrap_or(u64::MAX);
            warn!(
                combinations,
                limit,
                bounds = ?space.bounds(),
                "Layout search refused: combination space over budget"
            );
            Err(OptimizeError::SearchSpaceTooLarge {
                combinations,
                limit,
            })
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-sheet scan
// ────────────────────────────────────────────────────────────────────────────

struct SheetSearch {
    best: Option<Candidate>,
    examined: u64,
    feasible: u64,
}

fn search_sheet(
    problem: &Problem,
    space: &LayoutSpace,
    sheet_index: usize,
    cancel: &CancelToken,
) -> Result<SheetSearch, OptimizeError> {
    cancel.check()?;

    let sheet_size = problem.sheet_sizes[sheet_index];
    let sheet_area = sheet_size.area();
    let geometry = resolve_geometry(sheet_area);
    let mut tracker = BestTracker::new();
    let mut examined = 0u64;
    let mut feasible = 0u64;

    let mut cursor = space.iter();
    while let Some(counts) = cursor.next_combination() {
        examined += 1;
        if examined % CANCEL_CHECK_INTERVAL == 0 {
            cancel.check()?;
        }

        let Some(footprint) = check_feasibility(counts, &problem.products, sheet_area, geometry)
        else {
            continue;
        };
        feasible += 1;

        let score = score_layout(counts, &problem.products);
        tracker.consider(score, || Candidate {
            sheet_index,
            sheet_size,
            counts: counts.to_vec(),
            raw_area: footprint.raw_area,
            adjusted_area: footprint.adjusted_area,
            score,
        });
    }

    match tracker.best() {
        Some(best) => debug!(
            sheet = sheet_area,
            counts = ?best.counts,
            score = ?best.score,
            examined,
            feasible,
            "Sheet best"
        ),
        None => debug!(sheet = sheet_area, examined, "No feasible layout on sheet"),
    }

    Ok(SheetSearch {
        best: tracker.into_best(),
        examined,
        feasible,
    })
}
