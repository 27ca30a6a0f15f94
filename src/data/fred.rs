//! FRED time-series client
//!
//! Fetches the most recent observation of a treasury yield series from the
//! FRED observations endpoint. The series value is published in percentage
//! points; it is converted to a decimal rate here. FRED encodes missing data
//! as the literal string ".", which is a lookup failure, not a crash.

use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::core::{PricerError, PricerResult};

/// FRED observations API client
pub struct FredClient {
    client: reqwest::blocking::Client,
    base_url: String,
    series_id: String,
    api_key: String,
}

/// Most recent value of the yield series, as a decimal rate.
#[derive(Debug, Clone, Copy)]
pub struct YieldObservation {
    pub rate: f64,
    pub as_of: Option<NaiveDate>,
}

impl FredClient {
    pub fn new(config: &Config) -> PricerResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PricerError::network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            series_id: config.series_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the latest observation of the configured series.
    ///
    /// One request, no retry; the caller decides what a failure means.
    pub fn latest_yield(&self) -> PricerResult<YieldObservation> {
        let url = format!(
            "{}?series_id={}&api_key={}&file_type=json",
            self.base_url, self.series_id, self.api_key
        );

        // without_url keeps the api_key out of error strings
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PricerError::network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricerError::data(format!(
                "series request returned status {}",
                status
            )));
        }

        let body = response
            .text()
            .map_err(|e| PricerError::network(e.without_url().to_string()))?;

        parse_latest_yield(&body)
    }

    pub fn series_id(&self) -> &str {
        &self.series_id
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    #[serde(default)]
    date: Option<NaiveDate>,
    value: String,
}

/// Extract the last observation from a raw observations payload.
pub fn parse_latest_yield(body: &str) -> PricerResult<YieldObservation> {
    let parsed: ObservationsResponse = serde_json::from_str(body)
        .map_err(|e| PricerError::data(format!("malformed observations payload: {}", e)))?;

    let last = parsed
        .observations
        .last()
        .ok_or_else(|| PricerError::data("no observations returned"))?;

    let percent: f64 = last
        .value
        .trim()
        .parse()
        .map_err(|_| PricerError::data(format!("non-numeric observation value {:?}", last.value)))?;

    Ok(YieldObservation {
        rate: percent / 100.0,
        as_of: last.date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latest_value() {
        let body = r#"{"observations":[{"date":"2024-06-28","value":"4.33"}]}"#;
        let obs = parse_latest_yield(body).unwrap();
        assert!((obs.rate - 0.0433).abs() < 1e-12);
        assert_eq!(obs.as_of, NaiveDate::from_ymd_opt(2024, 6, 28));
    }

    #[test]
    fn test_parse_without_date() {
        let body = r#"{"observations":[{"value":"4.33"}]}"#;
        let obs = parse_latest_yield(body).unwrap();
        assert!((obs.rate - 0.0433).abs() < 1e-12);
        assert!(obs.as_of.is_none());
    }

    #[test]
    fn test_parse_takes_last_observation() {
        let body = r#"{"observations":[
            {"date":"2024-06-26","value":"4.40"},
            {"date":"2024-06-27","value":"4.37"},
            {"date":"2024-06-28","value":"4.33"}
        ]}"#;
        let obs = parse_latest_yield(body).unwrap();
        assert!((obs.rate - 0.0433).abs() < 1e-12);
    }

    #[test]
    fn test_missing_data_marker_is_error() {
        // FRED publishes "." on holidays and weekends
        let body = r#"{"observations":[{"date":"2024-07-04","value":"."}]}"#;
        assert!(matches!(
            parse_latest_yield(body),
            Err(PricerError::Data(_))
        ));
    }

    #[test]
    fn test_empty_and_malformed_payloads() {
        assert!(parse_latest_yield(r#"{"observations":[]}"#).is_err());
        assert!(parse_latest_yield(r#"{"error_code":400}"#).is_err());
        assert!(parse_latest_yield("not json").is_err());
    }

    #[test]
    #[ignore] // Requires network and FRED_API_KEY
    fn test_live_lookup() {
        let config = Config::from_env().unwrap();
        let client = FredClient::new(&config).unwrap();
        let obs = client.latest_yield().unwrap();

        assert!(obs.rate > -0.05 && obs.rate < 0.25);
        println!("{} yield: {:.4}", client.series_id(), obs.rate);
    }
}
