#![cfg(feature = "serde")]

use bs_heatmap::{default_configs, generate_heatmaps, AppConfig, CalculatorConfig, HeatmapConfig};

#[test]
fn test_partial_toml_uses_defaults() {
    let config = HeatmapConfig::from_toml_str(
        r#"
        strike_price = 120.0
        points = 21
        "#,
    )
    .expect("valid TOML");

    assert_eq!(config.strike_price, 120.0);
    assert_eq!(config.points, 21);
    assert_eq!(config.min_volatility, 0.01);
    assert_eq!(config.max_spot_price, 200.0);
    assert_eq!(config.purchase_price_put, 65.0);
    assert!(!config.parallel);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(
        HeatmapConfig::from_toml_str("").unwrap(),
        HeatmapConfig::default()
    );
    assert_eq!(
        CalculatorConfig::from_toml_str("").unwrap(),
        CalculatorConfig::default()
    );
}

#[test]
fn test_app_config_tables() {
    let config = AppConfig::from_toml_str(
        r#"
        [calculator]
        spot_price = 100.0
        volatility = 0.25

        [heatmap]
        min_spot_price = 80.0
        max_spot_price = 120.0
        parallel = true
        "#,
    )
    .expect("valid TOML");

    assert_eq!(config.calculator.spot_price, 100.0);
    assert_eq!(config.calculator.volatility, 0.25);
    assert_eq!(config.calculator.strike_price, 150.0);
    assert_eq!(config.heatmap.min_spot_price, 80.0);
    assert!(config.heatmap.parallel);
    assert!(config.heatmap.validate().is_ok());
}

#[test]
fn test_malformed_toml_is_an_error() {
    assert!(HeatmapConfig::from_toml_str("points = \"eleven\"").is_err());
    assert!(HeatmapConfig::from_toml_str("strike_price = ").is_err());
}

#[test]
fn test_from_file_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "bs_heatmap_config_{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "[heatmap]\ntime_to_expiration = 0.25\n").unwrap();

    let config = AppConfig::from_file(&path).expect("config file should load");
    assert_eq!(config.heatmap.time_to_expiration, 0.25);
    std::fs::remove_file(&path).ok();

    let missing = AppConfig::from_file(path.with_extension("missing"));
    let err = missing.unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read config file"));
}

#[test]
fn test_generate_heatmaps_rejects_invalid_config() {
    let config = HeatmapConfig {
        min_volatility: 0.8,
        max_volatility: 0.2,
        ..HeatmapConfig::default()
    };
    let err = generate_heatmaps(&config).unwrap_err();
    assert!(err.to_string().contains("volatility"), "{}", err);

    let config = HeatmapConfig {
        strike_price: -1.0,
        ..HeatmapConfig::default()
    };
    assert!(generate_heatmaps(&config).is_err());
}

#[test]
fn test_generate_heatmaps_presets() {
    for (config, points) in [
        (default_configs::reference(), 11),
        (default_configs::fine(), 21),
        (default_configs::coarse(), 5),
    ] {
        let report = generate_heatmaps(&config).expect("preset should be valid");
        assert_eq!(report.spot_prices.len(), points);
        assert_eq!(report.volatilities.len(), points);
        for plot in report.plots() {
            assert_eq!(plot.matrix.shape(), (points, points));
        }
    }
}
