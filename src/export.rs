//! CSV serialization of grid matrices.
//!
//! Layout mirrors the heatmap: a header row of two-decimal spot labels, then one
//! record per volatility with two-decimal cell values.

use std::io::Write;

use anyhow::{ensure, Context, Result};

use crate::grid::axis::axis_labels;
use crate::grid::types::Matrix;

/// Write `matrix` as CSV with a `volatility` label column followed by one column per spot.
///
/// # Errors
///
/// Fails if the axis lengths do not match the matrix shape or the writer fails.
pub fn write_matrix_csv<W: Write>(
    writer: W,
    spot_prices: &[f64],
    volatilities: &[f64],
    matrix: &Matrix,
) -> Result<()> {
    ensure!(
        matrix.shape() == (volatilities.len(), spot_prices.len()),
        "matrix shape {:?} does not match axes ({} volatilities, {} spot prices)",
        matrix.shape(),
        volatilities.len(),
        spot_prices.len()
    );

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(spot_prices.len() + 1);
    header.push("volatility".to_string());
    header.extend(axis_labels(spot_prices));
    wtr.write_record(&header)?;

    for (label, row) in axis_labels(volatilities).into_iter().zip(matrix.iter_rows()) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(label);
        record.extend(row.iter().map(|v| format!("{:.2}", v)));
        wtr.write_record(&record)?;
    }

    wtr.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// [`write_matrix_csv`] into an in-memory string
pub fn matrix_to_csv_string(
    spot_prices: &[f64],
    volatilities: &[f64],
    matrix: &Matrix,
) -> Result<String> {
    let mut buf = Vec::new();
    write_matrix_csv(&mut buf, spot_prices, volatilities, matrix)?;
    Ok(String::from_utf8(buf)?)
}
