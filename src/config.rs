//! User-facing inputs for the single-option calculator and the heatmap pages.
//!
//! Defaults match the values pre-filled in the interactive front-end. With the
//! `serde` feature both configs deserialize from TOML; every field is optional and
//! falls back to its default.

use crate::error::{is_positive, DomainError};
use crate::grid::types::{FixedParameters, GridSpec, DEFAULT_GRID_POINTS};
use crate::models::bs::OptionParameters;

/// Lowest volatility the front-end slider accepts
pub const MIN_VOLATILITY_BOUND: f64 = 0.01;
/// Highest volatility the front-end slider accepts
pub const MAX_VOLATILITY_BOUND: f64 = 1.0;

/// Inputs of the single-option pricing calculator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CalculatorConfig {
    pub spot_price: f64,
    pub strike_price: f64,
    pub risk_free_rate: f64,
    pub time_to_expiration: f64,
    pub volatility: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            spot_price: 140.0,
            strike_price: 150.0,
            risk_free_rate: 0.05,
            time_to_expiration: 0.5,
            volatility: 0.3,
        }
    }
}

impl CalculatorConfig {
    /// Unchecked parameters, NaN-propagating like the formula itself
    pub fn option_parameters(&self) -> OptionParameters {
        OptionParameters::new(
            self.spot_price,
            self.strike_price,
            self.risk_free_rate,
            self.time_to_expiration,
            self.volatility,
        )
    }

    /// Validated parameters
    pub fn try_option_parameters(&self) -> Result<OptionParameters, DomainError> {
        OptionParameters::try_new(
            self.spot_price,
            self.strike_price,
            self.risk_free_rate,
            self.time_to_expiration,
            self.volatility,
        )
    }
}

/// Inputs of the call/put price and profit/loss heatmaps
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct HeatmapConfig {
    pub min_volatility: f64,
    pub max_volatility: f64,
    pub min_spot_price: f64,
    pub max_spot_price: f64,
    /// Samples per axis
    pub points: usize,
    pub strike_price: f64,
    pub risk_free_rate: f64,
    pub time_to_expiration: f64,
    /// Reference price for the call profit/loss formula
    pub purchase_price_call: f64,
    /// Reference price for the put profit/loss formula
    pub purchase_price_put: f64,
    /// Evaluate grid rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            min_volatility: 0.01,
            max_volatility: 1.0,
            min_spot_price: 100.0,
            max_spot_price: 200.0,
            points: DEFAULT_GRID_POINTS,
            strike_price: 150.0,
            risk_free_rate: 0.02,
            time_to_expiration: 1.0,
            purchase_price_call: 135.0,
            purchase_price_put: 65.0,
            parallel: false,
        }
    }
}

impl HeatmapConfig {
    /// 11×11 grid over the front-end defaults
    pub fn reference() -> Self {
        Self::default()
    }

    /// 21×21 grid, evaluated in parallel
    pub fn fine() -> Self {
        Self {
            points: 21,
            parallel: true,
            ..Self::default()
        }
    }

    /// 5×5 grid for quick checks
    pub fn coarse() -> Self {
        Self {
            points: 5,
            ..Self::default()
        }
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            min_volatility: self.min_volatility,
            max_volatility: self.max_volatility,
            min_spot_price: self.min_spot_price,
            max_spot_price: self.max_spot_price,
            points: self.points,
        }
    }

    pub fn fixed_parameters(&self) -> FixedParameters {
        FixedParameters {
            strike_price: self.strike_price,
            risk_free_rate: self.risk_free_rate,
            time_to_expiration: self.time_to_expiration,
        }
    }

    /// Enforce the front-end's input constraints.
    ///
    /// Volatility bounds must lie within the slider range
    /// [`MIN_VOLATILITY_BOUND`, `MAX_VOLATILITY_BOUND`]; everything else must be
    /// inside the pricing domain.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.grid_spec().validate()?;
        if self.min_volatility < MIN_VOLATILITY_BOUND || self.max_volatility > MAX_VOLATILITY_BOUND
        {
            return Err(DomainError::InvalidGridRange {
                axis: "volatility",
                min: self.min_volatility,
                max: self.max_volatility,
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
        for (field, purchase_price) in [
            ("purchase_price_call", self.purchase_price_call),
            ("purchase_price_put", self.purchase_price_put),
        ] {
            if !purchase_price.is_finite() {
                return Err(DomainError::InvalidPurchasePrice {
                    field,
                    purchase_price,
                });
            }
        }
        Ok(())
    }
}

/// Both pages' inputs, as `[calculator]` and `[heatmap]` TOML tables
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AppConfig {
    pub calculator: CalculatorConfig,
    pub heatmap: HeatmapConfig,
}

#[cfg(feature = "serde")]
mod loading {
    use super::*;
    use anyhow::{Context, Result};
    use serde::de::DeserializeOwned;
    use std::path::Path;

    fn parse<T: DeserializeOwned>(text: &str) -> Result<T> {
        toml::from_str(text).context("failed to parse TOML configuration")
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    impl HeatmapConfig {
        pub fn from_toml_str(text: &str) -> Result<Self> {
            parse(text)
        }

        pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
            read(path.as_ref())
        }
    }

    impl CalculatorConfig {
        pub fn from_toml_str(text: &str) -> Result<Self> {
            parse(text)
        }
    }

    impl AppConfig {
        pub fn from_toml_str(text: &str) -> Result<Self> {
            parse(text)
        }

        pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
            read(path.as_ref())
        }
    }
}
