//! # Vanilla Pricer
//!
//! A small desk for theoretical European option prices: Black-Scholes
//! pricing from five market inputs, with the risk-free rate taken from a
//! user override or the latest FRED treasury yield observation.
//!
//! ## Key Components
//!
//! - **Pricing**: closed-form Black-Scholes price and Greeks (no dividends)
//! - **Rate Resolution**: user override → FRED lookup → 2% fallback
//! - **Configuration**: API key and series from the environment
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vanilla_pricer::prelude::*;
//!
//! let config = Config::from_env().unwrap();
//! let provider = RateProvider::new(&config).unwrap();
//!
//! // Resolve a rate (remote lookup, falls back to 2% on any failure)
//! let quote = provider.resolve(false, "");
//!
//! // Price a call
//! let inputs = PricingInputs::new(OptionKind::Call, 11.82, 11.50, 18.0, 0.30, quote.rate);
//! let price = black_scholes::price(&inputs).unwrap();
//! println!("call: ${:.2}", price);
//! ```
//!
//! ## What This Does NOT Do
//!
//! - American exercise, implied vol solving, portfolios
//! - Persistence of past calculations
//! - Caching of remote rates (each calculation re-fetches)

pub mod config;
pub mod core;
pub mod data;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::config::Config;

    pub use crate::core::{Greeks, OptionKind, PricerError, PricerResult, PricingInputs};

    pub use crate::data::{
        parse_latest_yield, FredClient, RateCondition, RateProvider, RateQuote, RateSource,
        YieldObservation, FALLBACK_RATE,
    };

    pub use crate::models::black_scholes;
    pub use crate::models::{greeks as bs_greeks, norm_cdf, norm_pdf, price as bs_price};
}

// Re-export main types at crate root
pub use crate::core::{PricerError, PricerResult};
