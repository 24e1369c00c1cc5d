//! Best-candidate tracking and the cross-sheet reduction.
//!
//! Per sheet, a candidate replaces the running best only when its score is
//! strictly smaller, so the first-seen candidate wins ties. Across sheets the
//! reduction key is `(score, sheet_index)`, which reproduces a sequential
//! first-seen scan no matter which order per-sheet results arrive in.

use crate::optimizer::models::Candidate;
use crate::optimizer::scoring::Score;

/// Running best for a single sheet size. Holds at most one candidate.
#[derive(Debug, Default)]
pub struct BestTracker {
    best: Option<Candidate>,
}

impl BestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `score` would replace the current best.
    pub fn improves(&self, score: &Score) -> bool {
        match &self.best {
            None => true,
            Some(current) => *score < current.score,
        }
    }

    /// Offers a candidate, building it only if it wins.
    pub fn consider(&mut self, score: Score, build: impl FnOnce() -> Candidate) -> bool {
        if !self.improves(&score) {
            return false;
        }
        self.best = Some(build());
        true
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    pub fn into_best(self) -> Option<Candidate> {
        self.best
    }
}

/// Picks the global best from per-sheet bests, in any arrival order.
pub fn select_global<I>(per_sheet: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    per_sheet
        .into_iter()
        .min_by(|a, b| (a.score, a.sheet_index).cmp(&(b.score, b.sheet_index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::models::SheetSize;
    use crate::optimizer::scoring::SheetsNeeded;

    fn candidate(sheet_index: usize, sheets: u64, overprint: u128, tag: u64) -> Candidate {
        Candidate {
            sheet_index,
            sheet_size: SheetSize::new(100.0).unwrap(),
            counts: vec![tag],
            raw_area: 0.0,
            adjusted_area: 0.0,
            score: Score {
                sheets_needed: SheetsNeeded::Finite(sheets),
                overprint,
            },
        }
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let mut tracker = BestTracker::new();
        let first = candidate(0, 2, 1, 1);
        let tie = candidate(0, 2, 1, 2);
        assert!(tracker.consider(first.score, || first.clone()));
        assert!(!tracker.consider(tie.score, || tie.clone()));
        assert_eq!(tracker.best().unwrap().counts, vec![1]);
    }

    #[test]
    fn test_strictly_better_replaces() {
        let mut tracker = BestTracker::new();
        let worse = candidate(0, 3, 0, 1);
        let better_overprint = candidate(0, 3, 0, 2);
        let fewer_sheets = candidate(0, 2, 9, 3);
        tracker.consider(worse.score, || worse.clone());
        tracker.consider(better_overprint.score, || better_overprint.clone());
        tracker.consider(fewer_sheets.score, || fewer_sheets.clone());
        assert_eq!(tracker.into_best().unwrap().counts, vec![3]);
    }

    #[test]
    fn test_losing_candidate_is_never_built() {
        let mut tracker = BestTracker::new();
        let best = candidate(0, 1, 0, 1);
        tracker.consider(best.score, || best.clone());
        let accepted = tracker.consider(candidate(0, 5, 0, 2).score, || {
            panic!("loser must not be materialized")
        });
        assert!(!accepted);
    }

    #[test]
    fn test_global_reduction_ignores_arrival_order() {
        let a = candidate(0, 2, 3, 10);
        let b = candidate(1, 2, 1, 11);
        let c = candidate(2, 2, 1, 12);
        let forward = select_global(vec![a.clone(), b.clone(), c.clone()]).unwrap();
        let reversed = select_global(vec![c, b, a]).unwrap();
        assert_eq!(forward.sheet_index, 1);
        assert_eq!(reversed.sheet_index, 1);
    }

    #[test]
    fn test_empty_reduction_is_none() {
        assert!(select_global(Vec::new()).is_none());
    }
}
