//! Core data types for the pricing desk
//!
//! Defines fundamental types:
//! - OptionKind / PricingInputs: what gets priced
//! - Greeks: sensitivities reported with a price
//! - PricerError: error taxonomy

pub mod error;
pub mod greeks;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use option::*;
