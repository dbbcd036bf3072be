// File: crates/histogram-core/src/samples.rs
// Summary: Validated hourly sample sequence; index 0 is the most recent hour, index 47 the oldest.

use crate::error::{ChartError, Result};
use crate::types::BUCKETS;

/// Exactly [`BUCKETS`] finite, non-negative samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    values: Vec<f64>,
}

impl Samples {
    /// Construct samples enforcing the hourly-window invariants:
    /// length == 48, every value finite and >= 0.
    pub fn try_new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ChartError::InvalidInput("sample sequence is empty".into()));
        }
        if values.len() != BUCKETS {
            return Err(ChartError::InvalidInput(format!(
                "expected {BUCKETS} samples, got {}",
                values.len()
            )));
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::InvalidInput(format!("sample {i} is not finite")));
        }
        if let Some(i) = values.iter().position(|v| *v < 0.0) {
            return Err(ChartError::InvalidInput(format!(
                "sample {i} is negative ({})",
                values[i]
            )));
        }
        Ok(Self { values })
    }

    /// All-zero samples.
    pub fn zeros() -> Self {
        Self { values: vec![0.0; BUCKETS] }
    }

    /// Largest sample; 0 when every bucket is empty.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn get(&self, index: usize) -> Option<f64> { self.values.get(index).copied() }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn as_slice(&self) -> &[f64] { &self.values }
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ { self.values.iter().copied() }
}

impl TryFrom<Vec<f64>> for Samples {
    type Error = ChartError;
    fn try_from(values: Vec<f64>) -> Result<Self> { Self::try_new(values) }
}

impl TryFrom<&[f64]> for Samples {
    type Error = ChartError;
    fn try_from(values: &[f64]) -> Result<Self> { Self::try_new(values.to_vec()) }
}

impl AsRef<[f64]> for Samples {
    fn as_ref(&self) -> &[f64] { &self.values }
}
