// demos/calculator.rs

//! Single-option pricing calculator
//!
//! Prices the calculator page's default option (or the `[calculator]` table of a
//! TOML file given as the first argument) and prints prices, parity check and Greeks.
//!
//! Usage:
//!     cargo run --example calculator -- [config.toml]

use anyhow::Result;
use bs_heatmap::{AppConfig, CalculatorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let calculator = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_file(path)?.calculator,
        None => CalculatorConfig::default(),
    };

    println!("Options Pricing Calculator");
    println!("==========================");
    println!("  Spot price:         {:.2}", calculator.spot_price);
    println!("  Strike price:       {:.2}", calculator.strike_price);
    println!("  Risk-free rate:     {:.4}", calculator.risk_free_rate);
    println!("  Time to expiration: {:.4} years", calculator.time_to_expiration);
    println!("  Volatility:         {:.4}", calculator.volatility);

    // Invalid inputs still price (as NaN/inf); flag them rather than abort
    let params = match calculator.try_option_parameters() {
        Ok(params) => params,
        Err(e) => {
            println!("\nWarning: {}", e);
            calculator.option_parameters()
        }
    };

    let result = params.price();
    println!("\nCall Option Price: {:.2}", result.call_price);
    println!("Put Option Price:  {:.2}", result.put_price);
    println!("Put-call parity gap: {:.3e}", result.parity_gap(&params));

    let g = params.greeks();
    println!("\n{:<8} {:>12} {:>12}", "Greek", "Call", "Put");
    println!("{}", "-".repeat(34));
    println!("{:<8} {:>12.6} {:>12.6}", "Delta", g.call_delta, g.put_delta);
    println!("{:<8} {:>12.6} {:>12.6}", "Gamma", g.gamma, g.gamma);
    println!("{:<8} {:>12.6} {:>12.6}", "Vega", g.vega, g.vega);
    println!("{:<8} {:>12.6} {:>12.6}", "Theta", g.call_theta, g.put_theta);
    println!("{:<8} {:>12.6} {:>12.6}", "Rho", g.call_rho, g.put_rho);

    Ok(())
}
