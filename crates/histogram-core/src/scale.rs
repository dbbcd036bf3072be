// File: crates/histogram-core/src/scale.rs
// Summary: Linear scale mapping a data domain onto a pixel range; either end may be reversed for right-to-left layouts.

use crate::ticks;

/// Linear mapping from `domain` onto `range`. Either interval may be reversed
/// (e.g. domain `[47, 0]` puts index 0 at the end of the range).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    fn domain_span(&self) -> f64 { self.domain.1 - self.domain.0 }

    /// Map a domain value to the range. A zero-span domain maps everything onto `range.0`.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let span = self.domain_span();
        if span.abs() < 1e-12 {
            return self.range.0;
        }
        let t = (v - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Nice tick values across the domain, at most `max_count` of them, in ascending order.
    pub fn ticks(&self, max_count: usize) -> Vec<f64> {
        let lo = self.domain.0.min(self.domain.1);
        let hi = self.domain.0.max(self.domain.1);
        ticks::nice_ticks(lo, hi, max_count)
    }

    pub fn with_range(mut self, range: (f64, f64)) -> Self {
        self.range = range;
        self
    }
}
