//! Axum route handler for the layout optimizer.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, info_span};
use uuid::Uuid;

use crate::errors::AppError;
use crate::optimizer::{
    optimize_with, validate_request, BestLayout, CancelToken, OptimizeError, OptimizeRequest,
};
use crate::state::AppState;

/// POST /optimize
///
/// Validates the body, then runs the search on the blocking pool under the
/// configured timeout. On timeout the search's cancel token is tripped so the
/// worker stops at its next check instead of running to completion.
pub async fn handle_optimize(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<BestLayout>, AppError> {
    let Json(request) = payload?;
    let problem = validate_request(request)?;

    let run_id = Uuid::new_v4();
    let span = info_span!(
        "optimize",
        %run_id,
        products = problem.products.len(),
        sheets = problem.sheet_sizes.len()
    );

    let timeout = state.config.search_timeout();
    let cancel = CancelToken::with_deadline(timeout);
    let worker_cancel = cancel.clone();
    let limits = state.limits.clone();

    // CPU-bound search — spawn_blocking to avoid blocking the async executor.
    let task = tokio::task::spawn_blocking(move || {
        span.in_scope(|| optimize_with(&problem, &limits, &worker_cancel))
    });

    let outcome = match tokio::time::timeout(timeout, task).await {
        Ok(joined) => joined.map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in optimize: {e}"))
        })??,
        Err(_) => {
            cancel.cancel();
            return Err(OptimizeError::DeadlineExceeded {
                elapsed_ms: cancel.elapsed().as_millis() as u64,
            }
            .into());
        }
    };

    info!(
        %run_id,
        sheet_size = outcome.best.sheet_size,
        sheets_needed = outcome.best.sheets_needed,
        overprint = outcome.best.overprint,
        "Optimize request served"
    );
    Ok(Json(outcome.best))
}
