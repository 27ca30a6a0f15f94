//! Startup configuration
//!
//! The FRED API key is a secret and is only ever sourced from the
//! environment, read once at startup. A missing key is fatal before any
//! interface is shown.

use serde::{Deserialize, Serialize};

use crate::core::{PricerError, PricerResult};

/// 2-year constant maturity treasury yield series
pub const DEFAULT_SERIES_ID: &str = "DGS2";

pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";

/// Bound on the blocking rate lookup so the form never freezes
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// FRED API key (required, `FRED_API_KEY`)
    pub api_key: String,
    /// Series to quote the risk-free rate from (`FRED_SERIES_ID`)
    pub series_id: String,
    /// Observations endpoint (`FRED_BASE_URL`)
    pub base_url: String,
    /// HTTP timeout for the rate lookup, in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Only the API key is required; series and endpoint have sensible
    /// defaults and exist mainly for tests and alternate hosts.
    pub fn from_env() -> PricerResult<Self> {
        let api_key = std::env::var("FRED_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                PricerError::missing_configuration(
                    "FRED_API_KEY is not set; export it before starting",
                )
            })?;

        let series_id =
            std::env::var("FRED_SERIES_ID").unwrap_or_else(|_| DEFAULT_SERIES_ID.to_string());
        let base_url =
            std::env::var("FRED_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            series_id,
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutation does not race a parallel test
    #[test]
    fn test_from_env() {
        std::env::remove_var("FRED_API_KEY");
        assert!(matches!(
            Config::from_env(),
            Err(PricerError::MissingConfiguration(_))
        ));

        std::env::set_var("FRED_API_KEY", "test-key");
        std::env::remove_var("FRED_SERIES_ID");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.series_id, DEFAULT_SERIES_ID);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        std::env::remove_var("FRED_API_KEY");
    }
}
