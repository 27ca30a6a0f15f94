//! Risk-free rate resolution
//!
//! Three-tier precedence: user override, then remote series lookup, then the
//! 2% fallback. Every failure path is absorbed here; callers always get a
//! usable rate plus a condition describing any degradation.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::PricerResult;
use crate::data::fred::{FredClient, YieldObservation};

/// Rate used whenever no valid rate can be determined.
pub const FALLBACK_RATE: f64 = 0.02;

/// Where a resolved rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    UserOverride,
    RemoteLookup,
    Fallback,
}

/// Why a resolution fell back to the default rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateCondition {
    /// Custom-rate text was not parseable as a number
    InvalidOverride,
    /// Remote lookup failed (network, status, payload, missing value)
    LookupFailed(String),
}

impl fmt::Display for RateCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateCondition::InvalidOverride => {
                write!(f, "Invalid custom rate. Using default (2.00%).")
            }
            RateCondition::LookupFailed(reason) => {
                write!(f, "Error retrieving yield ({}). Using default (2.00%).", reason)
            }
        }
    }
}

/// Outcome of one rate resolution; transient, produced per calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateQuote {
    /// Annualized decimal rate, fallback-filled on failure
    pub rate: f64,
    pub source: RateSource,
    /// Calendar date of the remote observation, when known
    pub as_of: Option<NaiveDate>,
    /// Present when resolution degraded to the fallback
    pub condition: Option<RateCondition>,
}

impl RateQuote {
    fn fallback(condition: RateCondition) -> Self {
        Self {
            rate: FALLBACK_RATE,
            source: RateSource::Fallback,
            as_of: None,
            condition: Some(condition),
        }
    }

    fn from_lookup(result: PricerResult<YieldObservation>) -> Self {
        match result {
            Ok(obs) => Self {
                rate: obs.rate,
                source: RateSource::RemoteLookup,
                as_of: obs.as_of,
                condition: None,
            },
            Err(e) => Self::fallback(RateCondition::LookupFailed(e.to_string())),
        }
    }
}

/// Resolves the risk-free rate used in a calculation
pub struct RateProvider {
    client: FredClient,
}

impl RateProvider {
    pub fn new(config: &Config) -> PricerResult<Self> {
        Ok(Self {
            client: FredClient::new(config)?,
        })
    }

    /// Resolve the rate for one calculation.
    ///
    /// Never fails. With the override enabled, the text is parsed as a
    /// percentage; otherwise the latest series observation is fetched fresh
    /// (no caching, no retry). Either path degrades to the 2% fallback.
    pub fn resolve(&self, use_override: bool, override_text: &str) -> RateQuote {
        let quote = if use_override {
            parse_override(override_text)
        } else {
            RateQuote::from_lookup(self.client.latest_yield())
        };

        match &quote.condition {
            Some(condition) => tracing::warn!("{}", condition),
            None => tracing::debug!(
                rate = quote.rate,
                source = ?quote.source,
                "resolved risk-free rate"
            ),
        }

        quote
    }
}

/// Interpret custom-rate text as percentage points.
fn parse_override(text: &str) -> RateQuote {
    match text.trim().parse::<f64>() {
        Ok(percent) if percent.is_finite() => RateQuote {
            rate: percent / 100.0,
            source: RateSource::UserOverride,
            as_of: None,
            condition: None,
        },
        _ => RateQuote::fallback(RateCondition::InvalidOverride),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PricerError;
    use crate::data::fred::parse_latest_yield;

    #[test]
    fn test_override_parses_as_percentage() {
        let quote = parse_override("2.5");
        assert!((quote.rate - 0.025).abs() < 1e-12);
        assert_eq!(quote.source, RateSource::UserOverride);
        assert!(quote.condition.is_none());

        // Surrounding whitespace is tolerated
        let quote = parse_override(" 4.75 ");
        assert!((quote.rate - 0.0475).abs() < 1e-12);

        // Negative rates are legal
        let quote = parse_override("-0.5");
        assert!((quote.rate + 0.005).abs() < 1e-12);
        assert_eq!(quote.source, RateSource::UserOverride);
    }

    #[test]
    fn test_bad_override_falls_back() {
        for text in ["abc", "", "2,5", "NaN"] {
            let quote = parse_override(text);
            assert!((quote.rate - FALLBACK_RATE).abs() < 1e-12, "text {:?}", text);
            assert_eq!(quote.source, RateSource::Fallback);
            assert_eq!(quote.condition, Some(RateCondition::InvalidOverride));
        }
    }

    #[test]
    fn test_lookup_success_becomes_remote_quote() {
        let body = r#"{"observations":[{"date":"2024-06-28","value":"4.33"}]}"#;
        let quote = RateQuote::from_lookup(parse_latest_yield(body));

        assert!((quote.rate - 0.0433).abs() < 1e-12);
        assert_eq!(quote.source, RateSource::RemoteLookup);
        assert!(quote.as_of.is_some());
        assert!(quote.condition.is_none());
    }

    #[test]
    fn test_lookup_failure_falls_back() {
        // "." is FRED's missing-data marker
        let body = r#"{"observations":[{"value":"."}]}"#;
        let quote = RateQuote::from_lookup(parse_latest_yield(body));

        assert!((quote.rate - FALLBACK_RATE).abs() < 1e-12);
        assert_eq!(quote.source, RateSource::Fallback);
        assert!(matches!(
            quote.condition,
            Some(RateCondition::LookupFailed(_))
        ));

        let quote = RateQuote::from_lookup(Err(PricerError::network("connection refused")));
        assert_eq!(quote.source, RateSource::Fallback);
        assert!((quote.rate - FALLBACK_RATE).abs() < 1e-12);
    }

    #[test]
    fn test_condition_messages() {
        let msg = RateCondition::InvalidOverride.to_string();
        assert!(msg.contains("2.00%"));

        let msg = RateCondition::LookupFailed("status 500".into()).to_string();
        assert!(msg.contains("status 500"));
        assert!(msg.contains("2.00%"));
    }
}
