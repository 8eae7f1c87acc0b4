// demos/heatmaps.rs

//! Evaluates the call/put price and profit/loss grids and writes each one as CSV
//! and as an annotated SVG heatmap.
//!
//! Usage:
//!     cargo run --example heatmaps -- [heatmap.toml] [output_dir]
//!
//! Without a config file the dashboard defaults are used. Files are written to
//! `output_dir` (default: `heatmaps/`).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bs_heatmap::{generate_heatmaps, render_heatmap_svg, write_matrix_csv, HeatmapConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => HeatmapConfig::from_file(path)?,
        None => HeatmapConfig::default(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "heatmaps".to_string()));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let report = generate_heatmaps(&config)?;
    println!(
        "Evaluated {}x{} grid (strike {:.2}, rate {:.4}, T {:.4})",
        report.volatilities.len(),
        report.spot_prices.len(),
        config.strike_price,
        config.risk_free_rate,
        config.time_to_expiration
    );

    let names = ["call_prices", "put_prices", "call_profit_loss", "put_profit_loss"];
    for (name, plot) in names.iter().zip(report.plots()) {
        let csv_path = out_dir.join(format!("{}.csv", name));
        let file = fs::File::create(&csv_path)
            .with_context(|| format!("failed to create {}", csv_path.display()))?;
        write_matrix_csv(file, plot.spot_prices, plot.volatilities, plot.matrix)?;

        let svg_path = out_dir.join(format!("{}.svg", name));
        fs::write(&svg_path, render_heatmap_svg(&plot)?)
            .with_context(|| format!("failed to write {}", svg_path.display()))?;

        println!(
            "  {:<32} min {:>9.2}  max {:>9.2}  -> {}",
            plot.title,
            plot.matrix.min().unwrap_or(f64::NAN),
            plot.matrix.max().unwrap_or(f64::NAN),
            svg_path.display()
        );
    }

    Ok(())
}
