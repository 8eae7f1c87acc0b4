//! # bs-heatmap: Black-Scholes Pricing and Spot/Volatility Heatmaps
//!
//! `bs-heatmap` prices European call and put options with the Black-Scholes closed
//! form and sweeps that formula over grids of spot price and volatility, producing
//! the price and profit/loss matrices behind interactive heatmap dashboards.
//!
//! ## Core Features
//!
//! - **Pricing Model**: `d1`, `d2`, call and put prices plus first-order Greeks
//! - **Grid Evaluation**: price and profit/loss matrices over `[volatility][spot]` grids,
//!   sequential or rayon-parallel with identical results
//! - **Configuration**: TOML-loadable inputs with the front-end's defaults and presets
//! - **Output**: CSV export and annotated SVG heatmaps of any matrix
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_heatmap::{price, evaluate_price_grid, FixedParameters, GridSpec, OptionParameters};
//!
//! // Single-point pricing
//! let params = OptionParameters::new(140.0, 150.0, 0.05, 0.5, 0.30);
//! let result = price(&params);
//! assert!((result.call_price - 9.2016).abs() < 1e-3);
//!
//! // 11x11 grid over spot 100..200 and volatility 0.01..1.00
//! let spec = GridSpec::new(0.01, 1.0, 100.0, 200.0);
//! let fixed = FixedParameters { strike_price: 150.0, risk_free_rate: 0.02, time_to_expiration: 1.0 };
//! let (calls, puts) = evaluate_price_grid(&spec, &fixed);
//! assert_eq!(calls.shape(), (11, 11));
//! assert_eq!(puts.shape(), (11, 11));
//! ```
//!
//! ## Input Validation
//!
//! The formulas never fail: non-positive spot, strike, time or volatility produce
//! NaN or infinite values that flow through to the matrices unchanged. Use
//! [`OptionParameters::try_new`], [`GridSpec::validate`] or
//! [`HeatmapConfig::validate`] to reject such inputs with a [`DomainError`] instead.
//!
//! ## Profit/Loss Formula
//!
//! Profit/loss cells follow the dashboard's capped formula
//! `max(purchase_call - strike - call, -call)` and
//! `max(strike - purchase_put - put, -put)`. This is not the textbook
//! `payoff - premium` P&L and is kept verbatim.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod models;
pub mod render;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;
use tracing::info;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Pricing model
pub use models::bs::{
    call_price, d1, d2, greeks, price, put_price, BlackScholes, Greeks, OptionParameters,
    PriceResult,
};
pub use models::traits::OptionPricer;

// Grid evaluation
pub use grid::{
    axis_labels, build_axis, call_profit_loss, evaluate_price_grid, evaluate_profit_loss_grid,
    put_profit_loss, FixedParameters, GridEvaluator, GridSpec, Matrix, PriceMatrix,
    ProfitLossMatrix, DEFAULT_GRID_POINTS, MAX_GRID_POINTS,
};

// Configuration and errors
pub use config::{AppConfig, CalculatorConfig, HeatmapConfig};
pub use error::DomainError;

// Output
pub use export::{matrix_to_csv_string, write_matrix_csv};
pub use render::{render_heatmap_svg, HeatmapPlot, Palette};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured heatmap settings.
///
/// All presets share the front-end defaults (volatility 0.01-1.00, spot 100-200,
/// strike 150, rate 2%, one year, purchase prices 135/65) and differ in grid density.
pub mod default_configs {
    use crate::config::HeatmapConfig;

    /// 11×11 grid, sequential. Matches the dashboard's heatmaps cell for cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_heatmap::default_configs;
    ///
    /// let config = default_configs::reference();
    /// assert_eq!(config.points, 11);
    /// ```
    pub fn reference() -> HeatmapConfig {
        HeatmapConfig::reference()
    }

    /// 21×21 grid evaluated on the rayon pool.
    pub fn fine() -> HeatmapConfig {
        HeatmapConfig::fine()
    }

    /// 5×5 grid for smoke tests and previews.
    pub fn coarse() -> HeatmapConfig {
        HeatmapConfig::coarse()
    }
}

// ================================================================================================
// HEATMAP REPORT
// ================================================================================================

/// Axes and all four matrices for one heatmap configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapReport {
    /// Column coordinates
    pub spot_prices: Vec<f64>,
    /// Row coordinates
    pub volatilities: Vec<f64>,
    pub call_prices: PriceMatrix,
    pub put_prices: PriceMatrix,
    pub call_profit_loss: ProfitLossMatrix,
    pub put_profit_loss: ProfitLossMatrix,
}

impl HeatmapReport {
    /// Titled views of the four matrices, in dashboard order
    pub fn plots(&self) -> [HeatmapPlot<'_>; 4] {
        [
            self.plot("Call Option Prices Heatmap", &self.call_prices, Palette::Sequential),
            self.plot("Put Option Prices Heatmap", &self.put_prices, Palette::Sequential),
            self.plot(
                "Call Option Profit/Loss Heatmap",
                &self.call_profit_loss,
                Palette::Diverging,
            ),
            self.plot(
                "Put Option Profit/Loss Heatmap",
                &self.put_profit_loss,
                Palette::Diverging,
            ),
        ]
    }

    fn plot<'a>(
        &'a self,
        title: &'a str,
        matrix: &'a Matrix,
        palette: Palette,
    ) -> HeatmapPlot<'a> {
        HeatmapPlot::new(title, &self.spot_prices, &self.volatilities, matrix, palette)
    }
}

/// Validate `config` and evaluate the price and profit/loss grids it describes.
///
/// # Errors
///
/// Returns a [`DomainError`] (wrapped in `anyhow::Error`) when the configuration
/// violates the front-end constraints; see [`HeatmapConfig::validate`].
///
/// # Example
///
/// ```rust
/// use bs_heatmap::{default_configs, generate_heatmaps};
///
/// let report = generate_heatmaps(&default_configs::coarse())?;
/// assert_eq!(report.call_prices.shape(), (5, 5));
/// assert_eq!(report.spot_prices.len(), 5);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_heatmaps(config: &HeatmapConfig) -> Result<HeatmapReport> {
    config.validate()?;

    let spec = config.grid_spec();
    let fixed = config.fixed_parameters();
    let evaluator = GridEvaluator::new(spec).parallel(config.parallel);

    info!(
        points = spec.points,
        strike = fixed.strike_price,
        parallel = config.parallel,
        "generating heatmaps"
    );

    let (call_prices, put_prices) = evaluator.evaluate_price_grid(&fixed);
    let (call_profit_loss, put_profit_loss) = evaluator.evaluate_profit_loss_grid(
        &fixed,
        config.purchase_price_call,
        config.purchase_price_put,
    );

    Ok(HeatmapReport {
        spot_prices: spec.spot_prices(),
        volatilities: spec.volatilities(),
        call_prices,
        put_prices,
        call_profit_loss,
        put_profit_loss,
    })
}
