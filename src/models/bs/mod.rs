// Closed-form Black-Scholes pricing of European calls and puts on a
// non-dividend-paying underlying. Every quantity is recomputed from the five
// inputs on each call; nothing is cached.

pub mod greeks;

use crate::error::{is_positive, DomainError};
use crate::models::traits::OptionPricer;
use crate::models::utils::norm_cdf;

pub use greeks::{greeks, Greeks};

/// The five market inputs of the Black-Scholes formula.
///
/// Immutable once constructed; use [`with_spot_price`](Self::with_spot_price) and
/// [`with_volatility`](Self::with_volatility) to derive modified copies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    spot_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    time_to_expiration: f64,
    volatility: f64,
}

impl OptionParameters {
    /// Build parameters without validation.
    ///
    /// Out-of-domain values (non-positive spot, strike, time or volatility) are
    /// accepted and propagate through the formulas as NaN or infinities.
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        time_to_expiration: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot_price,
            strike_price,
            risk_free_rate,
            time_to_expiration,
            volatility,
        }
    }

    /// Build parameters, rejecting any value outside the model's domain.
    ///
    /// # Errors
    ///
    /// Returns the [`DomainError`] of the first offending field, checked in the
    /// order spot, strike, rate, time, volatility.
    pub fn try_new(
        spot_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        time_to_expiration: f64,
        volatility: f64,
    ) -> Result<Self, DomainError> {
        let params = Self::new(
            spot_price,
            strike_price,
            risk_free_rate,
            time_to_expiration,
            volatility,
        );
        params.validate()?;
        Ok(params)
    }

    /// Check every field against its constraint.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !is_positive(self.spot_price) {
            return Err(DomainError::InvalidSpotPrice {
                spot_price: self.spot_price,
            });
        }
        if !is_positive(self.strike_price) {
            return Err(DomainError::InvalidStrikePrice {
                strike_price: self.strike_price,
            });
        }
        if !self.risk_free_rate.is_finite() {
            return Err(DomainError::InvalidRiskFreeRate {
                risk_free_rate: self.risk_free_rate,
            });
        }
        if !is_positive(self.time_to_expiration) {
            return Err(DomainError::InvalidTimeToExpiration {
                time_to_expiration: self.time_to_expiration,
            });
        }
        if !is_positive(self.volatility) {
            return Err(DomainError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        Ok(())
    }

    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn time_to_expiration(&self) -> f64 {
        self.time_to_expiration
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Copy with a different spot price
    pub fn with_spot_price(self, spot_price: f64) -> Self {
        Self { spot_price, ..self }
    }

    /// Copy with a different volatility
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Discounted strike `K * exp(-rT)`
    pub fn discounted_strike(&self) -> f64 {
        self.strike_price * (-self.risk_free_rate * self.time_to_expiration).exp()
    }

    pub fn d1(&self) -> f64 {
        d1(self)
    }

    pub fn d2(&self) -> f64 {
        d2(self)
    }

    pub fn call_price(&self) -> f64 {
        call_price(self)
    }

    pub fn put_price(&self) -> f64 {
        put_price(self)
    }

    pub fn price(&self) -> PriceResult {
        price(self)
    }
}

/// Call and put price for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceResult {
    pub call_price: f64,
    pub put_price: f64,
}

impl PriceResult {
    /// Deviation from put-call parity: `(C - P) - (S - K e^{-rT})`.
    ///
    /// Zero up to floating-point error for any valid parameter set.
    pub fn parity_gap(&self, params: &OptionParameters) -> f64 {
        (self.call_price - self.put_price) - (params.spot_price - params.discounted_strike())
    }
}

/// `d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)`
pub fn d1(params: &OptionParameters) -> f64 {
    let numerator = (params.spot_price / params.strike_price).ln()
        + (params.risk_free_rate + 0.5 * params.volatility.powi(2)) * params.time_to_expiration;
    let denominator = params.volatility * params.time_to_expiration.sqrt();
    numerator / denominator
}

/// `d2 = d1 - σ√T`
pub fn d2(params: &OptionParameters) -> f64 {
    d1(params) - params.volatility * params.time_to_expiration.sqrt()
}

/// Price of a European call option under Black-Scholes assumptions.
pub fn call_price(params: &OptionParameters) -> f64 {
    let d1 = d1(params);
    let d2 = d1 - params.volatility * params.time_to_expiration.sqrt();
    params.spot_price * norm_cdf(d1) - params.discounted_strike() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
pub fn put_price(params: &OptionParameters) -> f64 {
    let d1 = d1(params);
    let d2 = d1 - params.volatility * params.time_to_expiration.sqrt();
    params.discounted_strike() * norm_cdf(-d2) - params.spot_price * norm_cdf(-d1)
}

/// Call and put price sharing one evaluation of `d1`/`d2`.
pub fn price(params: &OptionParameters) -> PriceResult {
    let d1 = d1(params);
    let d2 = d1 - params.volatility * params.time_to_expiration.sqrt();
    let df_strike = params.discounted_strike();
    PriceResult {
        call_price: params.spot_price * norm_cdf(d1) - df_strike * norm_cdf(d2),
        put_price: df_strike * norm_cdf(-d2) - params.spot_price * norm_cdf(-d1),
    }
}

/// The Black-Scholes closed form as an [`OptionPricer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl OptionPricer for BlackScholes {
    fn model_name(&self) -> &str {
        "black_scholes"
    }

    fn price(&self, params: &OptionParameters) -> PriceResult {
        price(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator_defaults() -> OptionParameters {
        OptionParameters::new(140.0, 150.0, 0.05, 0.5, 0.30)
    }

    #[test]
    fn test_d1_d2_reference_values() {
        let p = calculator_defaults();
        assert!((p.d1() - (-0.101318367837)).abs() < 1e-10);
        assert!((p.d2() - (-0.313450402193)).abs() < 1e-10);
    }

    #[test]
    fn test_calculator_default_prices() {
        let p = calculator_defaults();
        assert!((p.call_price() - 9.201564843490).abs() < 1e-8);
        assert!((p.put_price() - 15.498051647740).abs() < 1e-8);
    }

    #[test]
    fn test_price_matches_individual_functions() {
        let p = calculator_defaults();
        let result = price(&p);
        assert_eq!(result.call_price, call_price(&p));
        assert_eq!(result.put_price, put_price(&p));
    }

    #[test]
    fn test_at_the_money_zero_rate_call_equals_put() {
        let p = OptionParameters::new(100.0, 100.0, 0.0, 1.0, 0.2);
        let result = p.price();
        assert!((result.call_price - result.put_price).abs() < 1e-12);
        assert!((result.call_price - 7.965567455406).abs() < 1e-8);
    }

    #[test]
    fn test_parity_gap_near_zero() {
        let p = calculator_defaults();
        assert!(p.price().parity_gap(&p).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_inputs_propagate_silently() {
        let zero_time = OptionParameters::new(100.0, 100.0, 0.05, 0.0, 0.2);
        assert!(!zero_time.d1().is_finite());

        let negative_spot = OptionParameters::new(-100.0, 100.0, 0.05, 1.0, 0.2);
        assert!(negative_spot.d1().is_nan());
        assert!(negative_spot.call_price().is_nan());
    }

    #[test]
    fn test_try_new_rejects_out_of_domain() {
        assert_eq!(
            OptionParameters::try_new(100.0, 100.0, 0.05, 1.0, 0.0),
            Err(DomainError::InvalidVolatility { volatility: 0.0 })
        );
        assert_eq!(
            OptionParameters::try_new(100.0, -1.0, 0.05, 1.0, 0.2),
            Err(DomainError::InvalidStrikePrice { strike_price: -1.0 })
        );
        assert!(matches!(
            OptionParameters::try_new(100.0, 100.0, f64::NAN, 1.0, 0.2),
            Err(DomainError::InvalidRiskFreeRate { .. })
        ));
        // Negative rates are valid
        assert!(OptionParameters::try_new(100.0, 100.0, -0.01, 1.0, 0.2).is_ok());
    }

    #[test]
    fn test_with_methods_leave_original_untouched() {
        let p = calculator_defaults();
        let q = p.with_spot_price(160.0).with_volatility(0.5);
        assert_eq!(p.spot_price(), 140.0);
        assert_eq!(p.volatility(), 0.30);
        assert_eq!(q.spot_price(), 160.0);
        assert_eq!(q.volatility(), 0.5);
        assert_eq!(q.strike_price(), p.strike_price());
    }

    #[test]
    fn test_black_scholes_pricer() {
        let pricer = BlackScholes;
        let p = calculator_defaults();
        assert_eq!(pricer.model_name(), "black_scholes");
        assert_eq!(OptionPricer::price(&pricer, &p), price(&p));
    }
}
