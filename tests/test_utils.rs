#![allow(dead_code)] // Each test binary uses a different subset of helpers

use bs_heatmap::{FixedParameters, GridSpec, Matrix, OptionParameters};
use serde::Deserialize;

/// One pinned row of `tests/data/reference_prices.csv`
#[derive(Debug, Deserialize)]
pub struct ReferenceRow {
    pub spot_price: f64,
    pub strike_price: f64,
    pub risk_free_rate: f64,
    pub time_to_expiration: f64,
    pub volatility: f64,
    pub d1: f64,
    pub d2: f64,
    pub call_price: f64,
    pub put_price: f64,
}

impl ReferenceRow {
    pub fn params(&self) -> OptionParameters {
        OptionParameters::new(
            self.spot_price,
            self.strike_price,
            self.risk_free_rate,
            self.time_to_expiration,
            self.volatility,
        )
    }
}

/// Load pinned Black-Scholes reference values from CSV
pub fn load_reference_prices(file_path: &str) -> Result<Vec<ReferenceRow>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: ReferenceRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Grid and fixed inputs pre-filled in the heatmap page
pub fn dashboard_grid() -> (GridSpec, FixedParameters) {
    (
        GridSpec::new(0.01, 1.0, 100.0, 200.0),
        FixedParameters {
            strike_price: 150.0,
            risk_free_rate: 0.02,
            time_to_expiration: 1.0,
        },
    )
}

/// Inputs pre-filled in the calculator page
pub fn calculator_params() -> OptionParameters {
    OptionParameters::new(140.0, 150.0, 0.05, 0.5, 0.30)
}

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {}, got {} (diff {:.3e})",
        what,
        expected,
        actual,
        (actual - expected).abs()
    );
}

pub fn assert_all_finite(m: &Matrix) {
    assert_eq!(m.non_finite_count(), 0, "matrix has non-finite cells: {:?}", m);
}
