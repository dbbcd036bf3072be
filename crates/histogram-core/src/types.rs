// File: crates/histogram-core/src/types.rs
// Summary: Shared constants (bucket count, sizes, paddings, animation timings).

/// Number of hourly buckets a chart shows.
pub const BUCKETS: usize = 48;
/// Default graphic height in pixels.
pub const HEIGHT: f64 = 70.0;
/// Default edge padding in pixels.
pub const PADDING: f64 = 20.0;
/// Default bar growth duration in milliseconds.
pub const TRANSITION_MS: f64 = 500.0;
/// Default per-bar start delay step in milliseconds.
pub const STAGGER_MS: f64 = 20.0;
/// Default maximum tick count on the value axis.
pub const VALUE_TICKS: usize = 2;
/// Default tick count hint on the time axis.
pub const TIME_TICKS: usize = 10;
/// Horizontal gap between adjacent bars.
pub const BAR_GAP: f64 = 2.0;
/// Tick mark length on both axes.
pub const TICK_SIZE: f64 = 6.0;
/// Axis label font size.
pub const FONT_SIZE: f64 = 10.0;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
