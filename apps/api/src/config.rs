use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::optimizer::search::DEFAULT_MAX_COMBINATIONS;
use crate::optimizer::SearchLimits;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Ceiling on combinations examined per request (space size × sheet count).
    pub max_combinations: u64,
    pub search_timeout_ms: u64,
    pub parallel_search: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            search_timeout_ms: 10_000,
            parallel_search: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_combinations: env_or("MAX_COMBINATIONS", defaults.max_combinations)?,
            search_timeout_ms: env_or("SEARCH_TIMEOUT_MS", defaults.search_timeout_ms)?,
            parallel_search: env_or("PARALLEL_SEARCH", defaults.parallel_search)?,
        })
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_combinations: self.max_combinations,
            parallel: self.parallel_search,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_well_formed_input() {
        assert_eq!(parse_value::<u16>("PORT", " 9090 ").unwrap(), 9090);
        assert!(!parse_value::<bool>("PARALLEL_SEARCH", "false").unwrap());
    }

    #[test]
    fn test_parse_value_names_the_variable() {
        let err = parse_value::<u64>("MAX_COMBINATIONS", "lots").unwrap_err();
        assert!(err.to_string().contains("MAX_COMBINATIONS"));
    }

    #[test]
    fn test_defaults_map_to_search_limits() {
        let config = Config::default();
        assert_eq!(config.search_limits(), SearchLimits::default());
        assert_eq!(config.search_timeout(), Duration::from_secs(10));
    }
}
