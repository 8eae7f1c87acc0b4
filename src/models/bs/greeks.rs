//! Option Greeks
//!
//! First-order sensitivities of the Black-Scholes call and put prices, plus gamma.
//! Vega and rho are per unit (1.00) change in volatility and rate; theta is per year.

use super::OptionParameters;
use crate::models::utils::{norm_cdf, norm_pdf};

/// Call and put sensitivities for one parameter set
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// dC/dS
    pub call_delta: f64,
    /// dP/dS
    pub put_delta: f64,
    /// d²V/dS², identical for calls and puts
    pub gamma: f64,
    /// dV/dσ, identical for calls and puts
    pub vega: f64,
    /// dC/dt (calendar time, per year)
    pub call_theta: f64,
    /// dP/dt (calendar time, per year)
    pub put_theta: f64,
    /// dC/dr
    pub call_rho: f64,
    /// dP/dr
    pub put_rho: f64,
}

/// Closed-form Greeks. Out-of-domain inputs yield NaN/infinite fields, like the prices.
pub fn greeks(params: &OptionParameters) -> Greeks {
    let s = params.spot_price();
    let k = params.strike_price();
    let r = params.risk_free_rate();
    let t = params.time_to_expiration();
    let sigma = params.volatility();

    let sqrt_t = t.sqrt();
    let d1 = params.d1();
    let d2 = d1 - sigma * sqrt_t;
    let pdf_d1 = norm_pdf(d1);
    let df_strike = params.discounted_strike();

    let call_delta = norm_cdf(d1);
    let decay = -s * pdf_d1 * sigma / (2.0 * sqrt_t);

    Greeks {
        call_delta,
        put_delta: call_delta - 1.0,
        gamma: pdf_d1 / (s * sigma * sqrt_t),
        vega: s * pdf_d1 * sqrt_t,
        call_theta: decay - r * df_strike * norm_cdf(d2),
        put_theta: decay + r * df_strike * norm_cdf(-d2),
        call_rho: t * df_strike * norm_cdf(d2),
        put_rho: -t * df_strike * norm_cdf(-d2),
    }
}

impl OptionParameters {
    pub fn greeks(&self) -> Greeks {
        greeks(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_call_delta_relationship() {
        let g = OptionParameters::new(100.0, 100.0, 0.05, 1.0, 0.2).greeks();
        assert!((g.call_delta - g.put_delta - 1.0).abs() < 1e-15);
        assert!(g.call_delta > 0.5 && g.call_delta < 1.0);
    }

    #[test]
    fn test_greeks_signs() {
        let g = OptionParameters::new(140.0, 150.0, 0.05, 0.5, 0.3).greeks();
        assert!(g.gamma > 0.0);
        assert!(g.vega > 0.0);
        assert!(g.call_theta < 0.0);
        assert!(g.call_rho > 0.0);
        assert!(g.put_rho < 0.0);
        assert!(g.put_delta < 0.0);
    }

    #[test]
    fn test_theta_parity() {
        // d(C - P)/dt = -r K e^{-rT}
        let p = OptionParameters::new(120.0, 110.0, 0.03, 2.0, 0.25);
        let g = p.greeks();
        let expected = -p.risk_free_rate() * p.discounted_strike();
        assert!((g.call_theta - g.put_theta - expected).abs() < 1e-10);
    }
}
