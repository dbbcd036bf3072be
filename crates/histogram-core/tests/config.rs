// File: crates/histogram-core/tests/config.rs
// Purpose: TOML configuration parsing, defaults, validation and theme resolution.

mod support;

use histogram_core::chart::layout;
use histogram_core::config::load;
use histogram_core::theme::{find, parse_hex};
use histogram_core::{ChartConfig, ChartError, Easing, Renderer, Samples};
use support::{afternoon, five_then_threes};

#[test]
fn defaults_match_the_classic_chart() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.height, 70.0);
    assert_eq!(cfg.padding, 20.0);
    assert_eq!(cfg.transition_ms, 500.0);
    assert_eq!(cfg.stagger_ms, 20.0);
    assert_eq!(cfg.value_ticks, 2);
    assert_eq!(cfg.easing, Easing::CubicInOut);
    assert_eq!(cfg.drawable_height(), 50.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn toml_overrides_and_fills_defaults() {
    let cfg = ChartConfig::from_toml_str(
        r#"
        height = 120
        transition_ms = 250.0
        easing = "linear"
        theme = "light"
        "#,
    )
    .expect("parse");
    assert_eq!(cfg.height, 120.0);
    assert_eq!(cfg.padding, 20.0);
    assert_eq!(cfg.transition_ms, 250.0);
    assert_eq!(cfg.easing, Easing::Linear);
    assert_eq!(Renderer::new(cfg.clone()).theme.name, "light");

    let samples = Samples::try_new(five_then_threes()).unwrap();
    let l = layout(&samples, 500.0, afternoon(), &cfg);
    assert_eq!(l.bars[0].height, 100.0);
}

#[test]
fn invalid_values_are_rejected() {
    for raw in ["height = 10\npadding = 20", "value_ticks = 0", "time_ticks = 49", "padding = -1"] {
        assert!(matches!(ChartConfig::from_toml_str(raw), Err(ChartError::Config(_))), "{raw}");
    }
    assert!(matches!(ChartConfig::from_toml_str("height = \"tall\""), Err(ChartError::Config(_))));
}

#[test]
fn missing_file_yields_defaults() {
    let cfg = load("target/test_out/definitely-missing.toml").expect("defaults");
    assert_eq!(cfg, ChartConfig::default());
}

#[test]
fn load_reads_file() {
    let path = std::path::PathBuf::from("target/test_out/histogram.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "stagger_ms = 10\ntheme = \"solarized-dark\"\n").unwrap();
    let cfg = load(&path).expect("load");
    assert_eq!(cfg.stagger_ms, 10.0);
    assert_eq!(cfg.theme, "solarized-dark");
}

#[test]
fn unknown_theme_falls_back_to_dark() {
    assert_eq!(find("SOLARIZED-LIGHT").name, "solarized-light");
    assert_eq!(find("neon").name, "dark");
}

#[test]
fn hex_colors_parse() {
    assert_eq!(parse_hex("#609cff"), Some((0x60, 0x9c, 0xff, 255)));
    assert_eq!(parse_hex("#fff"), Some((255, 255, 255, 255)));
    assert_eq!(parse_hex("#00000080"), Some((0, 0, 0, 0x80)));
    assert_eq!(parse_hex("609cff"), None);
    assert_eq!(parse_hex("#12"), None);
}
