// File: crates/histogram-core/src/ticks.rs
// Summary: "Nice" k * 10^p tick steps for axis layout.

/// A tick interval of `k * 10^p`. `k` is always 1, 2 or 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickStep {
    pub k: u32,
    pub p: i32,
}

impl TickStep {
    /// Pick the step closest to `(hi - lo) / count`, rounding the mantissa to 1, 2, 5 or 10.
    pub fn for_count(lo: f64, hi: f64, count: usize) -> Self {
        let raw = (hi - lo) / count.max(1) as f64;
        let p = raw.log10().floor() as i32;
        let err = raw / 10f64.powi(p);
        if err >= 50f64.sqrt() {
            Self { k: 1, p: p + 1 }
        } else if err >= 10f64.sqrt() {
            Self { k: 5, p }
        } else if err >= 2f64.sqrt() {
            Self { k: 2, p }
        } else {
            Self { k: 1, p }
        }
    }

    /// Next coarser step: 1 -> 2 -> 5 -> 10.
    pub fn widen(self) -> Self {
        match self.k {
            1 => Self { k: 2, p: self.p },
            2 => Self { k: 5, p: self.p },
            _ => Self { k: 1, p: self.p + 1 },
        }
    }

    pub fn value(&self) -> f64 {
        if self.p >= 0 {
            self.k as f64 * 10f64.powi(self.p)
        } else {
            self.k as f64 / 10f64.powi(-self.p)
        }
    }

    /// The `i`-th multiple of this step, computed so negative powers stay exact (0.1 * 3 == 0.3).
    fn nth(&self, i: i64) -> f64 {
        if self.p >= 0 {
            (i * self.k as i64) as f64 * 10f64.powi(self.p)
        } else {
            (i * self.k as i64) as f64 / 10f64.powi(-self.p)
        }
    }

    fn bounds(&self, lo: f64, hi: f64) -> (i64, i64) {
        let step = self.value();
        let first = (lo / step - 1e-9).ceil() as i64;
        let last = (hi / step + 1e-9).floor() as i64;
        (first, last)
    }

    pub fn count_in(&self, lo: f64, hi: f64) -> usize {
        let (first, last) = self.bounds(lo, hi);
        if last < first { 0 } else { (last - first + 1) as usize }
    }

    pub fn ticks_in(&self, lo: f64, hi: f64) -> Vec<f64> {
        let (first, last) = self.bounds(lo, hi);
        (first..=last).map(|i| self.nth(i)).collect()
    }
}

/// Nice ticks covering `[lo, hi]`, ascending, never more than `max_count`.
/// A degenerate interval yields its single endpoint.
pub fn nice_ticks(lo: f64, hi: f64, max_count: usize) -> Vec<f64> {
    if max_count == 0 || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if (hi - lo).abs() < 1e-12 {
        return vec![lo];
    }
    let mut step = TickStep::for_count(lo, hi, max_count);
    while step.count_in(lo, hi) > max_count {
        step = step.widen();
    }
    step.ticks_in(lo, hi)
}
