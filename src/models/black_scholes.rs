//! Black-Scholes Model
//!
//! Closed-form European option pricing (no dividends) plus first-order
//! Greeks. This is the entire analytic core of the desk: a pure function of
//! `PricingInputs`, no state, no logging, no batching.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{Greeks, OptionKind, PricerResult, PricingInputs};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
///
/// Requires vol > 0 and time > 0; callers go through `price`/`greeks`, which
/// validate before dividing.
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, vol, time) - vol * time.sqrt()
}

/// Black-Scholes European option price.
///
/// Rejects out-of-domain inputs instead of producing NaN/Inf: zero time or
/// zero vol is an `InvalidInput` error here, not an intrinsic-value shortcut.
pub fn price(inputs: &PricingInputs) -> PricerResult<f64> {
    inputs.validate()?;

    let spot = inputs.spot;
    let strike = inputs.strike;
    let rate = inputs.rate;
    let vol = inputs.volatility;
    let time = inputs.years_to_expiry();

    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = (-rate * time).exp();

    let value = match inputs.kind {
        OptionKind::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionKind::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    // Clamp the tiny negative values deep-OTM float cancellation can produce
    Ok(value.max(0.0))
}

/// Black-Scholes Greeks (same validation as `price`)
pub fn greeks(inputs: &PricingInputs) -> PricerResult<Greeks> {
    inputs.validate()?;

    let spot = inputs.spot;
    let strike = inputs.strike;
    let rate = inputs.rate;
    let vol = inputs.volatility;
    let time = inputs.years_to_expiry();

    let d1 = d1(spot, strike, rate, vol, time);
    let d2 = d2(spot, strike, rate, vol, time);
    let df = (-rate * time).exp();
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let delta = match inputs.kind {
        OptionKind::Call => norm_cdf(d1),
        OptionKind::Put => norm_cdf(d1) - 1.0,
    };

    // Gamma (same for call and put)
    let gamma = pdf_d1 / (spot * vol * sqrt_t);

    // Vega (same for call and put, per 1% vol move)
    let vega = spot * pdf_d1 * sqrt_t / 100.0;

    // Theta (per day)
    let term1 = -spot * pdf_d1 * vol / (2.0 * sqrt_t);
    let theta = match inputs.kind {
        OptionKind::Call => term1 - rate * strike * df * norm_cdf(d2),
        OptionKind::Put => term1 + rate * strike * df * norm_cdf(-d2),
    };
    let theta_per_day = theta / 365.0;

    // Rho (per 1% rate move)
    let rho = match inputs.kind {
        OptionKind::Call => strike * time * df * norm_cdf(d2) / 100.0,
        OptionKind::Put => -strike * time * df * norm_cdf(-d2) / 100.0,
    };

    Ok(Greeks::new(delta, gamma, theta_per_day, vega, rho))
}
