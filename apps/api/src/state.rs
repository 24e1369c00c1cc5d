use crate::config::Config;
use crate::optimizer::SearchLimits;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Search budget derived from `config` once at startup.
    pub limits: SearchLimits,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let limits = config.search_limits();
        Self { config, limits }
    }
}
