// Sheet layout optimizer: picks the per-sheet product counts that minimize
// print runs, then overprint, across all candidate sheet sizes.
// Pure and synchronous. Callers on an async runtime must use spawn_blocking.

pub mod cancel;
pub mod enumerator;
pub mod error;
pub mod feasibility;
pub mod geometry;
pub mod models;
pub mod scoring;
pub mod search;
pub mod selection;
pub mod validation;

// Re-export the public API consumed by the route handlers and library callers.
pub use cancel::CancelToken;
pub use error::OptimizeError;
pub use models::{BestLayout, Product};
pub use search::{optimize, optimize_with, SearchLimits, SearchOutcome};
pub use validation::{validate_request, OptimizeRequest};
