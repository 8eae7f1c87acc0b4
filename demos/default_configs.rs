use bs_heatmap::{default_configs, generate_heatmaps, HeatmapConfig};

fn describe(name: &str, config: &HeatmapConfig, use_case: &str) {
    let spec = config.grid_spec();
    println!("{}:", name);
    println!("   Grid: {}x{}", spec.points, spec.points);
    println!(
        "   Volatility: {:.2} - {:.2}",
        spec.min_volatility, spec.max_volatility
    );
    println!(
        "   Spot price: {:.2} - {:.2}",
        spec.min_spot_price, spec.max_spot_price
    );
    println!("   Parallel: {}", config.parallel);
    println!("   Use case: {}\n", use_case);
}

fn main() {
    println!("bs-heatmap Default Configuration Examples\n");

    let reference = default_configs::reference();
    describe(
        "1. Reference Configuration",
        &reference,
        "Dashboard-equivalent heatmaps",
    );
    describe(
        "2. Fine Configuration",
        &default_configs::fine(),
        "Smoother heatmaps, larger reports",
    );
    describe(
        "3. Coarse Configuration",
        &default_configs::coarse(),
        "Previews and smoke tests",
    );

    println!("Generating heatmaps with the reference config...");
    match generate_heatmaps(&reference) {
        Ok(report) => {
            println!("✅ Heatmaps generated!");
            println!(
                "   Call price range: {:?} - {:?}",
                report.call_prices.min(),
                report.call_prices.max()
            );
            println!(
                "   Put price range: {:?} - {:?}",
                report.put_prices.min(),
                report.put_prices.max()
            );
        }
        Err(e) => {
            println!("❌ Heatmap generation failed: {}", e);
        }
    }
}
