pub mod bs;

/// Common traits shared by pricing models
pub mod traits {
    use crate::models::bs::{OptionParameters, PriceResult};

    /// A closed-form European option pricer.
    ///
    /// The grid evaluator is generic over this trait so alternative kernels can be
    /// swept over the same spot/volatility grid.
    pub trait OptionPricer: Send + Sync {
        /// Returns the name of the model (e.g., "black_scholes")
        fn model_name(&self) -> &str;

        /// Call and put price for a single parameter set
        fn price(&self, params: &OptionParameters) -> PriceResult;
    }
}

/// Numerical helpers used by the pricing formulas
pub mod utils {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    /// Standard normal cumulative distribution function.
    ///
    /// Evaluated as `0.5 * erfc(-x / sqrt(2))`, which keeps full relative precision
    /// in the lower tail where `1 + erf(x)` would cancel.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Standard normal probability density function
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }
}
