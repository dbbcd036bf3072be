// File: crates/histogram-core/src/config.rs
// Summary: Chart configuration (sizes, timings, tick counts, theme) loaded from TOML with sensible defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{ChartError, Result};
use crate::types::{BUCKETS, HEIGHT, PADDING, STAGGER_MS, TIME_TICKS, TRANSITION_MS, VALUE_TICKS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Graphic height in pixels.
    pub height: f64,
    /// Edge padding in pixels; the bottom padding holds the time axis.
    pub padding: f64,
    /// Bar growth duration in milliseconds.
    pub transition_ms: f64,
    /// Start delay step; bar `i` waits `(48 - i) * stagger_ms`.
    pub stagger_ms: f64,
    /// Maximum number of ticks on the value axis.
    pub value_ticks: usize,
    /// Tick count hint for the time axis (1..=48).
    pub time_ticks: usize,
    pub easing: Easing,
    /// Theme preset name, see [`crate::theme::presets`].
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: HEIGHT,
            padding: PADDING,
            transition_ms: TRANSITION_MS,
            stagger_ms: STAGGER_MS,
            value_ticks: VALUE_TICKS,
            time_ticks: TIME_TICKS,
            easing: Easing::CubicInOut,
            theme: "dark".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: Self =
            toml::from_str(raw).map_err(|e| ChartError::Config(format!("TOML parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::Config(format!("padding must be >= 0, got {}", self.padding)));
        }
        if !self.height.is_finite() || self.height <= self.padding {
            return Err(ChartError::Config(format!(
                "height ({}) must exceed padding ({})",
                self.height, self.padding
            )));
        }
        if !(self.transition_ms >= 0.0 && self.stagger_ms >= 0.0) {
            return Err(ChartError::Config("animation timings must be >= 0".into()));
        }
        if self.value_ticks == 0 {
            return Err(ChartError::Config("value_ticks must be at least 1".into()));
        }
        if self.time_ticks == 0 || self.time_ticks > BUCKETS {
            return Err(ChartError::Config(format!(
                "time_ticks must be within 1..={BUCKETS}, got {}",
                self.time_ticks
            )));
        }
        Ok(())
    }

    /// Vertical space available to bars (height above the time axis).
    pub fn drawable_height(&self) -> f64 { self.height - self.padding }
}

/// Load configuration from a TOML file. Returns `ChartConfig::default()` if
/// the file doesn't exist so charts always have sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<ChartConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!("Config file not found at '{}'; using defaults.", path.display());
        return Ok(ChartConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ChartError::Config(format!("cannot read '{}': {e}", path.display())))?;
    ChartConfig::from_toml_str(&raw)
}
