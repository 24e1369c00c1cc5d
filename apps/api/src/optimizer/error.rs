//! Error taxonomy for the layout search.

use thiserror::Error;

/// Everything the optimizer can report instead of a layout.
///
/// Validation failures are raised before any search work starts; the search
/// itself only ever produces `Infeasible`, the budget/cancellation variants,
/// or `Internal`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The search finished, but no sheet size admits a layout that covers every product.
    #[error("No feasible layout fits any of the given sheet sizes")]
    Infeasible,

    /// The combination space exceeds the configured budget. Checked before enumeration.
    #[error("Search space of {combinations} combinations exceeds the limit of {limit}")]
    SearchSpaceTooLarge { combinations: u64, limit: u64 },

    #[error("Search cancelled")]
    Cancelled,

    #[error("Search deadline exceeded after {elapsed_ms}ms")]
    DeadlineExceeded { elapsed_ms: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
