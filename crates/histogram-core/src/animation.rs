// File: crates/histogram-core/src/animation.rs
// Summary: Explicit animation state (from, to, delay, duration, easing) interpreted by hosts on their own timers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Map normalized time `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
        }
    }
}

/// Interpolation of one numeric attribute from `from` to `to`, starting `delay_ms`
/// after the graphic is mounted and lasting `duration_ms`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub attr: &'static str,
    pub from: f64,
    pub to: f64,
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(attr: &'static str, from: f64, to: f64) -> Self {
        Self { attr, from, to, delay_ms: 0.0, duration_ms: 0.0, easing: Easing::default() }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Time (since mount) at which the attribute reaches `to`.
    pub fn end_ms(&self) -> f64 { self.delay_ms + self.duration_ms }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool { elapsed_ms >= self.end_ms() }

    /// Attribute value `elapsed_ms` after mount.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms < self.delay_ms {
            return self.from;
        }
        if self.duration_ms <= 0.0 || self.is_finished(elapsed_ms) {
            return self.to;
        }
        let t = (elapsed_ms - self.delay_ms) / self.duration_ms;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}
