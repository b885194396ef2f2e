// File: crates/column-core/src/dataset.rs
// Summary: Validated bar values paired 1:1 with category labels.

use crate::error::{ChartError, Result};
use crate::scale::ValueRange;

/// Bar magnitudes and their x-axis category names.
///
/// Construction goes through [`ChartDataset::try_new`], so an instance always
/// holds at least one finite, non-negative value and exactly one label per value.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDataset {
    values: Vec<f64>,
    labels: Vec<String>,
}

impl ChartDataset {
    pub fn try_new(values: Vec<f64>, labels: Vec<String>) -> Result<Self> {
        if values.len() != labels.len() {
            return Err(ChartError::LengthMismatch { values: values.len(), labels: labels.len() });
        }
        if values.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ChartError::NonFiniteValue { index, value });
            }
            if value < 0.0 {
                return Err(ChartError::NegativeValue { index, value });
            }
        }
        Ok(Self { values, labels })
    }

    /// Build from `(label, value)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let (labels, values): (Vec<String>, Vec<f64>) =
            pairs.into_iter().map(|(l, v)| (l.into(), v)).unzip();
        Self::try_new(values, labels)
    }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Displayable range for this data. `floor` fixes the minimum; without it
    /// the smallest value becomes the minimum. Every value must sit at or
    /// above the minimum.
    pub fn value_range(&self, floor: Option<f64>) -> Result<ValueRange> {
        let min = floor.unwrap_or_else(|| self.min_value());
        if let Some((index, &value)) = self.values.iter().enumerate().find(|(_, &v)| v < min) {
            return Err(ChartError::BelowMinimum { index, value, min });
        }
        Ok(ValueRange::with_headroom(min, self.max_value()))
    }
}
