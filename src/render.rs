//! Annotated SVG heatmaps of grid matrices.
//!
//! Row 0 (lowest volatility) is drawn at the top, matching the usual heatmap
//! orientation. Tick labels and cell annotations use two decimals.

use anyhow::{ensure, Result};
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::grid::axis::axis_labels;
use crate::grid::types::Matrix;

/// Colour scale used to fill cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Dark purple through teal to yellow, for prices
    Sequential,
    /// Blue through grey to red, for profit/loss
    Diverging,
}

impl Palette {
    fn stops(&self) -> [(u8, u8, u8); 3] {
        match self {
            Palette::Sequential => [(68, 1, 84), (33, 145, 140), (253, 231, 37)],
            Palette::Diverging => [(59, 76, 192), (221, 221, 221), (180, 4, 38)],
        }
    }

    /// Colour at position `t` in `[0, 1]`; values outside are clamped.
    pub fn color_at(&self, t: f64) -> RGBColor {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let stops = self.stops();
        let (from, to, local) = if t < 0.5 {
            (stops[0], stops[1], t * 2.0)
        } else {
            (stops[1], stops[2], (t - 0.5) * 2.0)
        };
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * local).round() as u8;
        RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
    }
}

/// Everything needed to draw one heatmap
#[derive(Debug, Clone, Copy)]
pub struct HeatmapPlot<'a> {
    pub title: &'a str,
    pub spot_prices: &'a [f64],
    pub volatilities: &'a [f64],
    pub matrix: &'a Matrix,
    pub palette: Palette,
    pub size: (u32, u32),
}

impl<'a> HeatmapPlot<'a> {
    pub fn new(
        title: &'a str,
        spot_prices: &'a [f64],
        volatilities: &'a [f64],
        matrix: &'a Matrix,
        palette: Palette,
    ) -> Self {
        Self {
            title,
            spot_prices,
            volatilities,
            matrix,
            palette,
            size: (800, 600),
        }
    }
}

const MISSING_CELL: RGBColor = RGBColor(160, 160, 160);

/// Render `plot` to an SVG document.
///
/// # Errors
///
/// Fails on an empty matrix, on axes that do not match the matrix shape, or if
/// plotters reports a drawing error.
pub fn render_heatmap_svg(plot: &HeatmapPlot<'_>) -> Result<String> {
    let (rows, cols) = plot.matrix.shape();
    ensure!(rows > 0 && cols > 0, "cannot render an empty matrix");
    ensure!(
        rows == plot.volatilities.len() && cols == plot.spot_prices.len(),
        "matrix shape {:?} does not match axes ({} volatilities, {} spot prices)",
        plot.matrix.shape(),
        plot.volatilities.len(),
        plot.spot_prices.len()
    );

    let lo = plot.matrix.min().unwrap_or(0.0);
    let hi = plot.matrix.max().unwrap_or(0.0);
    let span = hi - lo;
    let scale = |v: f64| if span > 0.0 { (v - lo) / span } else { 0.5 };

    let spot_labels = axis_labels(plot.spot_prices);
    let vol_labels = axis_labels(plot.volatilities);
    // Row 0 at the top of the chart
    let flip = |y: usize| rows - 1 - y;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, plot.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(plot.title, ("sans-serif", 24))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0..cols).into_segmented(), (0..rows).into_segmented())?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(cols)
            .y_labels(rows)
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(j) => spot_labels.get(*j).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .y_label_formatter(&|v| match v {
                SegmentValue::CenterOf(y) if *y < rows => {
                    vol_labels.get(flip(*y)).cloned().unwrap_or_default()
                }
                _ => String::new(),
            })
            .label_style(("sans-serif", 12))
            .x_desc("Spot Price")
            .y_desc("Volatility")
            .draw()?;

        let cells: Vec<(usize, usize, f64)> = plot
            .matrix
            .iter_rows()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &v)| (i, j, v)))
            .collect();

        chart.draw_series(cells.iter().map(|&(i, j, v)| {
            let y = flip(i);
            let fill = if v.is_finite() {
                plot.palette.color_at(scale(v))
            } else {
                MISSING_CELL
            };
            Rectangle::new(
                [
                    (SegmentValue::Exact(j), SegmentValue::Exact(y)),
                    (SegmentValue::Exact(j + 1), SegmentValue::Exact(y + 1)),
                ],
                fill.filled(),
            )
        }))?;

        let annotation = ("sans-serif", 11)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(cells.iter().map(|&(i, j, v)| {
            Text::new(
                format!("{:.2}", v),
                (SegmentValue::CenterOf(j), SegmentValue::CenterOf(flip(i))),
                annotation.clone(),
            )
        }))?;

        root.present()?;
    }

    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_endpoints() {
        assert_eq!(Palette::Sequential.color_at(0.0), RGBColor(68, 1, 84));
        assert_eq!(Palette::Sequential.color_at(1.0), RGBColor(253, 231, 37));
        assert_eq!(Palette::Diverging.color_at(0.5), RGBColor(221, 221, 221));
        assert_eq!(Palette::Diverging.color_at(7.0), RGBColor(180, 4, 38));
        assert_eq!(Palette::Diverging.color_at(f64::NAN), RGBColor(59, 76, 192));
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let m = Matrix::zeros(0, 0);
        let plot = HeatmapPlot::new("empty", &[], &[], &m, Palette::Sequential);
        assert!(render_heatmap_svg(&plot).is_err());
    }
}
