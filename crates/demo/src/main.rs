// File: crates/demo/src/main.rs
// Summary: Demo loads (or synthesizes) 48 hourly counts, drives a headless dashboard through render, resize, hover and detach, and writes the frames to target/out.
//
// Usage: histogram-demo [samples.csv] [--config chart.toml]
// Run with RUST_LOG=debug to see every render.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use histogram_core::config;
use histogram_core::{ChartConfig, Dashboard, FixedClock, MemoryHost, Renderer, BUCKETS};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (csv_path, config_path) = parse_args(std::env::args().skip(1))?;
    let cfg = match &config_path {
        Some(p) => config::load(p).with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };

    let samples = match &csv_path {
        Some(p) => load_samples_csv(p).with_context(|| format!("failed to load CSV '{}'", p.display()))?,
        None => synthesize(),
    };
    let max = samples.iter().cloned().fold(0.0, f64::max);
    tracing::info!(buckets = samples.len(), max, "samples ready");

    let now = chrono::Local::now().naive_local();
    let renderer = Renderer::new(cfg);
    let host = Rc::new(MemoryHost::new());
    let dashboard = Dashboard::new(Rc::clone(&host), renderer.clone(), FixedClock(now))?;
    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    // 1) Two charts: the loaded samples and a quieter copy.
    let wide = host.add_container(800.0);
    let narrow = host.add_container(400.0);
    let quiet: Vec<f64> = samples.iter().map(|v| (v * 0.5).floor()).collect();
    dashboard.register_chart(wide, &samples)?;
    dashboard.register_chart(narrow, &quiet)?;
    let _resize = dashboard.subscribe_resize();

    // 2) Frames from the entry animation.
    let half = renderer.config.transition_ms * 0.5;
    host.advance(half);
    write(&out_dir.join("wide_mid.svg"), host.svg(wide))?;
    host.advance(renderer.config.transition_ms + renderer.config.stagger_ms * BUCKETS as f64);
    write(&out_dir.join("wide.svg"), host.svg(wide))?;
    write(&out_dir.join("narrow.svg"), host.svg(narrow))?;

    // 3) Hover the most recent hour.
    match host.hover(wide, 0) {
        Some(text) => println!("Tooltip over the current hour: {text}"),
        None => println!("No tooltip for the current hour"),
    }
    host.leave(wide);

    // 4) Resize the window: every chart redraws at its new width.
    host.set_width(wide, 1024.0);
    host.set_width(narrow, 320.0);
    host.resize();
    host.advance(2_000.0);
    write(&out_dir.join("wide_resized.svg"), host.svg(wide))?;
    write(&out_dir.join("narrow_resized.svg"), host.svg(narrow))?;

    // 5) A container leaves the page; redraw isolates the failure, then prune it.
    host.detach(narrow);
    let report = dashboard.redraw_all();
    println!("Redraw: {} rendered, {} failed", report.rendered, report.failures.len());
    for (id, err) in &report.failures {
        println!("  chart {}: {err}", id.0);
    }
    let pruned = dashboard.prune_detached();
    println!("Pruned {pruned} chart(s); {} left", dashboard.chart_count());

    #[cfg(feature = "png")]
    {
        if let Some(frame) = host.frame(wide) {
            let out = out_dir.join("wide.png");
            histogram_core::raster::write_png(&frame, &renderer.theme, &out)?;
            println!("Wrote {}", out.display());
        }
    }

    println!("Wrote SVG frames to {}", out_dir.display());
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(Option<PathBuf>, Option<PathBuf>)> {
    let mut csv_path = None;
    let mut config_path = None;
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let p = args.next().context("--config needs a path")?;
            config_path = Some(PathBuf::from(p));
        } else {
            csv_path = Some(PathBuf::from(arg));
        }
    }
    Ok((csv_path, config_path))
}

fn write(path: &Path, svg: Option<String>) -> Result<()> {
    let svg = svg.context("container has no graphic")?;
    std::fs::write(path, svg).with_context(|| format!("failed to write '{}'", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Load hourly counts. Accepts a `hours_ago` (or `hour`) column with a `count`/`value`
/// column, or a single column of values in most-recent-first order. Missing hours are 0.
fn load_samples_csv(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_hour = idx(&["hours_ago", "hour", "index"]);
    let i_value = idx(&["count", "value", "total"]).unwrap_or(if i_hour == Some(0) { 1 } else { 0 });

    let mut out = vec![0.0; BUCKETS];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let slot = match i_hour {
            Some(ix) => rec.get(ix).and_then(|s| s.parse::<usize>().ok()),
            None => Some(row),
        };
        let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok());
        match (slot, value) {
            (Some(slot), Some(v)) if slot < BUCKETS => out[slot] = v,
            (Some(slot), Some(_)) => tracing::warn!(slot, "ignoring row beyond {BUCKETS} hours"),
            _ => tracing::warn!(row, "skipping unparsable row"),
        }
    }
    Ok(out)
}

/// Two days of traffic with a daytime peak.
fn synthesize() -> Vec<f64> {
    (0..BUCKETS)
        .map(|i| {
            let phase = (i as f64 / 24.0) * std::f64::consts::TAU;
            (40.0 + 30.0 * phase.cos() + (i % 5) as f64 * 3.0).round().max(0.0)
        })
        .collect()
}
