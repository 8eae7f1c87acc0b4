//! Spot/volatility grid evaluation
//!
//! Sweeps the pricing model over a two-dimensional grid of spot prices (columns) and
//! volatilities (rows), producing call/put price matrices and the matching
//! profit/loss matrices consumed by heatmap renderers.

pub mod axis;
pub mod evaluator;
pub mod types;

pub use axis::*;
pub use evaluator::*;
pub use types::*;
