use std::ops::Index;

use crate::error::{is_positive, DomainError};
use crate::grid::axis::build_axis;
use crate::models::bs::OptionParameters;

/// Samples per axis in the reference heatmaps (10 intervals)
pub const DEFAULT_GRID_POINTS: usize = 11;
/// Largest accepted sample count per axis
pub const MAX_GRID_POINTS: usize = 501;

/// Ranges swept by a heatmap: volatility along rows, spot price along columns
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub min_volatility: f64,
    pub max_volatility: f64,
    pub min_spot_price: f64,
    pub max_spot_price: f64,
    /// Samples per axis (both axes use the same count)
    pub points: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            min_volatility: 0.01,
            max_volatility: 1.0,
            min_spot_price: 100.0,
            max_spot_price: 200.0,
            points: DEFAULT_GRID_POINTS,
        }
    }
}

impl GridSpec {
    pub fn new(
        min_volatility: f64,
        max_volatility: f64,
        min_spot_price: f64,
        max_spot_price: f64,
    ) -> Self {
        Self {
            min_volatility,
            max_volatility,
            min_spot_price,
            max_spot_price,
            points: DEFAULT_GRID_POINTS,
        }
    }

    /// Same ranges with a different sample count per axis
    pub fn with_points(self, points: usize) -> Self {
        Self { points, ..self }
    }

    /// Column coordinates
    pub fn spot_prices(&self) -> Vec<f64> {
        build_axis(self.min_spot_price, self.max_spot_price, self.points)
    }

    /// Row coordinates
    pub fn volatilities(&self) -> Vec<f64> {
        build_axis(self.min_volatility, self.max_volatility, self.points)
    }

    /// Reject empty or oversized grids, reversed ranges and bounds outside the
    /// pricing domain.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.points == 0 || self.points > MAX_GRID_POINTS {
            return Err(DomainError::InvalidGridPoints {
                points: self.points,
            });
        }
        if !is_positive(self.min_volatility)
            || !self.max_volatility.is_finite()
            || self.min_volatility > self.max_volatility
        {
            return Err(DomainError::InvalidGridRange {
                axis: "volatility",
                min: self.min_volatility,
                max: self.max_volatility,
            });
        }
        if !is_positive(self.min_spot_price)
            || !self.max_spot_price.is_finite()
            || self.min_spot_price > self.max_spot_price
        {
            return Err(DomainError::InvalidGridRange {
                axis: "spot_price",
                min: self.min_spot_price,
                max: self.max_spot_price,
            });
        }
        Ok(())
    }
}

/// Inputs held constant across the grid
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedParameters {
    pub strike_price: f64,
    pub risk_free_rate: f64,
    pub time_to_expiration: f64,
}

impl Default for FixedParameters {
    fn default() -> Self {
        Self {
            strike_price: 150.0,
            risk_free_rate: 0.02,
            time_to_expiration: 1.0,
        }
    }
}

impl FixedParameters {
    /// Parameters for the grid cell at (`spot_price`, `volatility`)
    pub fn at(&self, spot_price: f64, volatility: f64) -> OptionParameters {
        OptionParameters::new(
            spot_price,
            self.strike_price,
            self.risk_free_rate,
            self.time_to_expiration,
            volatility,
        )
    }
}

/// Dense row-major matrix indexed `[volatility_index][spot_index]`.
///
/// `data.len() == rows * cols` always holds; deserialization rejects input that
/// breaks it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix")
)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for Matrix {
    type Error = DomainError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        if raw.rows.checked_mul(raw.cols) != Some(raw.data.len()) {
            return Err(DomainError::InvalidMatrixShape {
                rows: raw.rows,
                cols: raw.cols,
                cells: raw.data.len(),
            });
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            data: raw.data,
        })
    }
}

/// Call or put prices over a grid
pub type PriceMatrix = Matrix;
/// Call or put profit/loss over a grid
pub type ProfitLossMatrix = Matrix;

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub(crate) fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Build from row vectors. Returns `None` when rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    /// Two-decimal cell annotations, row by row
    pub fn annotations(&self) -> Vec<Vec<String>> {
        self.iter_rows()
            .map(|row| row.iter().map(|v| format!("{:.2}", v)).collect())
            .collect()
    }

    /// Smallest finite cell, if any
    pub fn min(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::min)
    }

    /// Largest finite cell, if any
    pub fn max(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }

    /// Number of NaN or infinite cells
    pub fn non_finite_count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_finite()).count()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
