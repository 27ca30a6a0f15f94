//! Market data access
//!
//! Handles:
//! - FRED observations endpoint for treasury yields
//! - Rate resolution with override and fallback

pub mod fred;
pub mod rates;

pub use fred::*;
pub use rates::*;
