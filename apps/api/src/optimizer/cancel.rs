//! Cooperative cancellation for long searches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::optimizer::error::OptimizeError;

/// How many combinations the search examines between token checks.
pub const CANCEL_CHECK_INTERVAL: u64 = 4096;

/// Shared stop flag plus an optional deadline.
///
/// Clones observe the same flag, so the async side can trip a token that a
/// blocking search thread is polling.
#[derive(Debug, Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    started: Instant,
    deadline: Option<Instant>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            started: Instant::now(),
            deadline: None,
        }
    }

    pub fn with_deadline(limit: Duration) -> Self {
        let started = Instant::now();
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            started,
            deadline: Some(started + limit),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// `Err` once the token is cancelled or its deadline has passed.
    pub fn check(&self) -> Result<(), OptimizeError> {
        if self.is_cancelled() {
            return Err(OptimizeError::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(OptimizeError::DeadlineExceeded {
                    elapsed_ms: self.elapsed().as_millis() as u64,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_passes() {
        assert!(CancelToken::new().check().is_ok());
    }

    #[test]
    fn test_cancel_is_visible_through_clones() {
        let token = CancelToken::new();
        let worker = token.clone();
        token.cancel();
        assert!(worker.is_cancelled());
        assert_eq!(worker.check(), Err(OptimizeError::Cancelled));
    }

    #[test]
    fn test_zero_deadline_is_exceeded() {
        let token = CancelToken::with_deadline(Duration::ZERO);
        assert!(matches!(
            token.check(),
            Err(OptimizeError::DeadlineExceeded { .. })
        ));
    }

    #[test]
    fn test_generous_deadline_passes() {
        let token = CancelToken::with_deadline(Duration::from_secs(3600));
        assert!(token.check().is_ok());
    }
}
