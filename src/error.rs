//! Error types for option parameter and grid validation.
//!
//! The pricing kernel itself never fails: out-of-domain inputs flow through the
//! closed-form formula as NaN or infinities. [`DomainError`] is produced only by
//! the explicit validation entry points ([`crate::OptionParameters::try_new`],
//! [`crate::GridSpec::validate`], [`crate::HeatmapConfig::validate`]).

use thiserror::Error;

/// Violation of a Black-Scholes input constraint.
///
/// Every variant carries the offending value so callers can surface it to the
/// user without re-deriving which field was wrong.
///
/// # Examples
/// ```
/// use bs_heatmap::DomainError;
///
/// let err = DomainError::InvalidVolatility { volatility: -0.2 };
/// assert!(err.to_string().contains("volatility"));
/// assert_eq!(err.field(), "volatility");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Spot price must be strictly positive and finite.
    #[error("Invalid spot_price: S = {spot_price} (must be > 0)")]
    InvalidSpotPrice { spot_price: f64 },

    /// Strike price must be strictly positive and finite.
    #[error("Invalid strike_price: K = {strike_price} (must be > 0)")]
    InvalidStrikePrice { strike_price: f64 },

    /// Risk-free rate may be negative but must be finite.
    #[error("Invalid risk_free_rate: r = {risk_free_rate} (must be finite)")]
    InvalidRiskFreeRate { risk_free_rate: f64 },

    /// Time to expiration (years) must be strictly positive and finite.
    #[error("Invalid time_to_expiration: T = {time_to_expiration} (must be > 0)")]
    InvalidTimeToExpiration { time_to_expiration: f64 },

    /// Volatility must be strictly positive and finite.
    #[error("Invalid volatility: σ = {volatility} (must be > 0)")]
    InvalidVolatility { volatility: f64 },

    /// A grid axis has `min > max` or a non-finite bound.
    #[error("Invalid {axis} range: [{min}, {max}]")]
    InvalidGridRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    /// A grid needs between 1 and [`crate::grid::MAX_GRID_POINTS`] samples per axis.
    #[error("Invalid grid point count: {points} (must be in 1..={max})", max = crate::grid::MAX_GRID_POINTS)]
    InvalidGridPoints { points: usize },

    /// A profit/loss reference price must be finite.
    #[error("Invalid {field}: {purchase_price} (must be finite)")]
    InvalidPurchasePrice {
        field: &'static str,
        purchase_price: f64,
    },

    /// Matrix cell count disagrees with its declared shape.
    #[error("Invalid matrix shape: {rows}x{cols} declared but {cells} cells given")]
    InvalidMatrixShape { rows: usize, cols: usize, cells: usize },
}

impl DomainError {
    /// Name of the input field that violated its constraint.
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidSpotPrice { .. } => "spot_price",
            DomainError::InvalidStrikePrice { .. } => "strike_price",
            DomainError::InvalidRiskFreeRate { .. } => "risk_free_rate",
            DomainError::InvalidTimeToExpiration { .. } => "time_to_expiration",
            DomainError::InvalidVolatility { .. } => "volatility",
            DomainError::InvalidGridRange { axis, .. } => *axis,
            DomainError::InvalidGridPoints { .. } => "points",
            DomainError::InvalidPurchasePrice { field, .. } => *field,
            DomainError::InvalidMatrixShape { .. } => "data",
        }
    }
}

/// `true` when `x` is finite and strictly positive.
pub(crate) fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(
            DomainError::InvalidSpotPrice { spot_price: 0.0 }.field(),
            "spot_price"
        );
        assert_eq!(
            DomainError::InvalidTimeToExpiration {
                time_to_expiration: -1.0
            }
            .field(),
            "time_to_expiration"
        );
        assert_eq!(
            DomainError::InvalidGridRange {
                axis: "volatility",
                min: 1.0,
                max: 0.5
            }
            .field(),
            "volatility"
        );
    }

    #[test]
    fn test_display_includes_value() {
        let err = DomainError::InvalidStrikePrice { strike_price: -5.0 };
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_is_positive() {
        assert!(is_positive(1e-12));
        assert!(!is_positive(0.0));
        assert!(!is_positive(-1.0));
        assert!(!is_positive(f64::NAN));
        assert!(!is_positive(f64::INFINITY));
    }
}
