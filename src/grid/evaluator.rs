use rayon::prelude::*;
use tracing::{debug, warn};

use crate::grid::types::{FixedParameters, GridSpec, Matrix, PriceMatrix, ProfitLossMatrix};
use crate::models::bs::{BlackScholes, PriceResult};
use crate::models::traits::OptionPricer;

/// Call profit/loss for one cell: `max(purchase - strike - call, -call)`.
///
/// Reproduces the heatmap's capped-loss formula as-is; it is not the textbook
/// `payoff - premium` P&L.
pub fn call_profit_loss(purchase_price_call: f64, strike_price: f64, call_price: f64) -> f64 {
    (purchase_price_call - strike_price - call_price).max(-call_price)
}

/// Put profit/loss for one cell: `max(strike - purchase - put, -put)`.
pub fn put_profit_loss(purchase_price_put: f64, strike_price: f64, put_price: f64) -> f64 {
    (strike_price - purchase_price_put - put_price).max(-put_price)
}

/// Evaluates a pricing model once per (volatility, spot) cell of a [`GridSpec`].
///
/// Rows follow the volatility axis and columns the spot axis. In parallel mode rows
/// are distributed across the rayon pool; each row is computed independently, so
/// results are identical to the sequential sweep.
#[derive(Debug, Clone)]
pub struct GridEvaluator<P = BlackScholes> {
    spec: GridSpec,
    pricer: P,
    parallel: bool,
}

impl GridEvaluator<BlackScholes> {
    pub fn new(spec: GridSpec) -> Self {
        Self::with_pricer(spec, BlackScholes)
    }
}

impl<P: OptionPricer> GridEvaluator<P> {
    pub fn with_pricer(spec: GridSpec, pricer: P) -> Self {
        Self {
            spec,
            pricer,
            parallel: false,
        }
    }

    /// Enable or disable row-parallel evaluation
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Call and put price matrices.
    pub fn evaluate_price_grid(&self, fixed: &FixedParameters) -> (PriceMatrix, PriceMatrix) {
        self.sweep(fixed, |prices| (prices.call_price, prices.put_price))
    }

    /// Call and put profit/loss matrices relative to the given purchase prices.
    pub fn evaluate_profit_loss_grid(
        &self,
        fixed: &FixedParameters,
        purchase_price_call: f64,
        purchase_price_put: f64,
    ) -> (ProfitLossMatrix, ProfitLossMatrix) {
        let strike = fixed.strike_price;
        self.sweep(fixed, |prices| {
            (
                call_profit_loss(purchase_price_call, strike, prices.call_price),
                put_profit_loss(purchase_price_put, strike, prices.put_price),
            )
        })
    }

    fn sweep<F>(&self, fixed: &FixedParameters, cell: F) -> (Matrix, Matrix)
    where
        F: Fn(PriceResult) -> (f64, f64) + Sync,
    {
        let spots = self.spec.spot_prices();
        let vols = self.spec.volatilities();
        let (rows, cols) = (vols.len(), spots.len());

        debug!(
            model = self.pricer.model_name(),
            rows,
            cols,
            parallel = self.parallel,
            "evaluating grid"
        );

        let eval_row = |&vol: &f64| -> Vec<(f64, f64)> {
            spots
                .iter()
                .map(|&spot| cell(self.pricer.price(&fixed.at(spot, vol))))
                .collect()
        };

        let cells: Vec<(f64, f64)> = if self.parallel {
            vols.par_iter().flat_map_iter(eval_row).collect()
        } else {
            vols.iter().flat_map(eval_row).collect()
        };
        let (first, second): (Vec<f64>, Vec<f64>) = cells.into_iter().unzip();

        let first = Matrix::from_row_major(rows, cols, first);
        let second = Matrix::from_row_major(rows, cols, second);

        let non_finite = first.non_finite_count() + second.non_finite_count();
        if non_finite > 0 {
            warn!(
                non_finite,
                strike = fixed.strike_price,
                time_to_expiration = fixed.time_to_expiration,
                "grid contains NaN or infinite cells; check inputs are positive"
            );
        }

        (first, second)
    }
}

/// Call and put price matrices for `spec` using the Black-Scholes model.
pub fn evaluate_price_grid(spec: &GridSpec, fixed: &FixedParameters) -> (PriceMatrix, PriceMatrix) {
    GridEvaluator::new(*spec).evaluate_price_grid(fixed)
}

/// Call and put profit/loss matrices for `spec` using the Black-Scholes model.
pub fn evaluate_profit_loss_grid(
    spec: &GridSpec,
    fixed: &FixedParameters,
    purchase_price_call: f64,
    purchase_price_put: f64,
) -> (ProfitLossMatrix, ProfitLossMatrix) {
    GridEvaluator::new(*spec).evaluate_profit_loss_grid(
        fixed,
        purchase_price_call,
        purchase_price_put,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bs::OptionParameters;

    #[test]
    fn test_cell_matches_direct_pricing() {
        let spec = GridSpec::new(0.1, 0.5, 80.0, 120.0).with_points(5);
        let fixed = FixedParameters {
            strike_price: 100.0,
            risk_free_rate: 0.03,
            time_to_expiration: 0.75,
        };
        let (calls, puts) = evaluate_price_grid(&spec, &fixed);
        let vol = spec.volatilities()[2];
        let spot = spec.spot_prices()[3];
        assert_eq!(spot, 110.0);
        let direct = OptionParameters::new(spot, 100.0, 0.03, 0.75, vol).price();
        assert_eq!(calls[(2, 3)], direct.call_price);
        assert_eq!(puts[(2, 3)], direct.put_price);
    }

    #[test]
    fn test_profit_loss_formulas() {
        assert_eq!(call_profit_loss(135.0, 150.0, 10.0), -10.0);
        assert_eq!(call_profit_loss(200.0, 150.0, 10.0), 40.0);
        assert_eq!(put_profit_loss(65.0, 150.0, 20.0), 65.0);
        assert_eq!(put_profit_loss(145.0, 150.0, 20.0), -15.0);
    }

    /// Prices every cell as `spot * 1000 + volatility`, so each value identifies its inputs.
    struct TaggingPricer;

    impl OptionPricer for TaggingPricer {
        fn model_name(&self) -> &str {
            "tagging"
        }

        fn price(&self, params: &OptionParameters) -> PriceResult {
            let tag = params.spot_price() * 1000.0 + params.volatility();
            PriceResult {
                call_price: tag,
                put_price: -tag,
            }
        }
    }

    #[test]
    fn test_custom_pricer_drives_every_cell() {
        let spec = GridSpec::new(0.25, 0.75, 10.0, 30.0).with_points(3);
        let fixed = FixedParameters::default();
        let spots = spec.spot_prices();
        let vols = spec.volatilities();

        for parallel in [false, true] {
            let evaluator = GridEvaluator::with_pricer(spec, TaggingPricer).parallel(parallel);
            let (calls, puts) = evaluator.evaluate_price_grid(&fixed);
            assert_eq!(calls.shape(), (3, 3));
            for (i, &vol) in vols.iter().enumerate() {
                for (j, &spot) in spots.iter().enumerate() {
                    assert_eq!(calls[(i, j)], spot * 1000.0 + vol);
                    assert_eq!(puts[(i, j)], -(spot * 1000.0 + vol));
                }
            }

            let (call_pl, _) = evaluator.evaluate_profit_loss_grid(&fixed, 135.0, 65.0);
            let tag = spots[1] * 1000.0 + vols[2];
            assert_eq!(call_pl[(2, 1)], call_profit_loss(135.0, 150.0, tag));
        }
    }

    #[test]
    fn test_parallel_flag() {
        let evaluator = GridEvaluator::new(GridSpec::default()).parallel(true);
        assert!(evaluator.is_parallel());
        assert_eq!(evaluator.spec().points, 11);
    }
}
