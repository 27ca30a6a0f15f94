//! Option contract inputs
//!
//! A calculation consumes one immutable `PricingInputs` value; nothing in the
//! core holds UI state or survives past a single pricing call.

use serde::{Deserialize, Serialize};

use crate::core::{PricerError, PricerResult};

/// Calendar-day denominator for the days-to-expiry conversion.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option kind (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        }
    }
}

/// Fully-resolved inputs for one pricing call.
///
/// Time is entered in calendar days and converted to years internally;
/// there is no independent entry of years.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricingInputs {
    pub kind: OptionKind,
    /// Current price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Calendar days to expiration
    pub days_to_expiry: f64,
    /// Annualized volatility (0.30 = 30%)
    pub volatility: f64,
    /// Annualized risk-free rate as a decimal fraction (0.02 = 2%)
    pub rate: f64,
}

impl PricingInputs {
    pub fn new(
        kind: OptionKind,
        spot: f64,
        strike: f64,
        days_to_expiry: f64,
        volatility: f64,
        rate: f64,
    ) -> Self {
        Self {
            kind,
            spot,
            strike,
            days_to_expiry,
            volatility,
            rate,
        }
    }

    /// Time to expiration in years
    pub fn years_to_expiry(&self) -> f64 {
        self.days_to_expiry / DAYS_PER_YEAR
    }

    /// Check the pricing invariants.
    ///
    /// The rate carries no sign constraint (rates can be negative), so this
    /// accepts any finite `rate` and can run before the rate is resolved.
    pub fn validate(&self) -> PricerResult<()> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricerError::invalid_input("spot price must be positive"));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricerError::invalid_input("strike price must be positive"));
        }
        if !self.days_to_expiry.is_finite() || self.days_to_expiry <= 0.0 {
            return Err(PricerError::invalid_input(
                "time to expiration must be positive",
            ));
        }
        if !self.volatility.is_finite() || self.volatility <= 0.0 {
            return Err(PricerError::invalid_input("volatility must be positive"));
        }
        if !self.rate.is_finite() {
            return Err(PricerError::invalid_input("rate must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_kind() {
        assert_eq!(OptionKind::Call.phi(), 1.0);
        assert_eq!(OptionKind::Put.phi(), -1.0);

        assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionKind::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionKind::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_years_conversion() {
        let inputs = PricingInputs::new(OptionKind::Call, 100.0, 100.0, 365.0, 0.2, 0.05);
        assert!((inputs.years_to_expiry() - 1.0).abs() < 1e-12);

        let inputs = PricingInputs::new(OptionKind::Call, 100.0, 100.0, 18.0, 0.2, 0.05);
        assert!((inputs.years_to_expiry() - 18.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate() {
        let good = PricingInputs::new(OptionKind::Call, 100.0, 100.0, 30.0, 0.2, 0.05);
        assert!(good.validate().is_ok());

        // Negative rates are legal
        let negative_rate = PricingInputs::new(OptionKind::Put, 100.0, 100.0, 30.0, 0.2, -0.005);
        assert!(negative_rate.validate().is_ok());

        let zero_strike = PricingInputs::new(OptionKind::Call, 100.0, 0.0, 30.0, 0.2, 0.05);
        assert!(matches!(
            zero_strike.validate(),
            Err(PricerError::InvalidInput(_))
        ));

        let zero_vol = PricingInputs::new(OptionKind::Call, 100.0, 100.0, 30.0, 0.0, 0.05);
        assert!(zero_vol.validate().is_err());

        let zero_days = PricingInputs::new(OptionKind::Call, 100.0, 100.0, 0.0, 0.2, 0.05);
        assert!(zero_days.validate().is_err());

        let nan_spot = PricingInputs::new(OptionKind::Call, f64::NAN, 100.0, 30.0, 0.2, 0.05);
        assert!(nan_spot.validate().is_err());
    }
}
