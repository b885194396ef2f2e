// File: crates/column-core/src/axis.rs
// Summary: Axis model (title + tick labels) and value-axis tick formatting.

use crate::scale::ValueRange;

/// Per-axis content. Text sizes and spacing live in [`crate::ChartConfig`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisSpec {
    pub title: String,
    pub tick_labels: Vec<String>,
}

impl AxisSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), tick_labels: Vec::new() }
    }

    pub fn with_tick_labels(mut self, labels: Vec<String>) -> Self {
        self.tick_labels = labels;
        self
    }

    pub fn default_category() -> Self { Self::new("Item") }

    pub fn default_value() -> Self { Self::new("Sales") }
}

/// Format a tick value with a fixed number of decimals.
pub fn format_tick(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Labels for the value axis, bottom to top.
pub fn value_tick_labels(range: &ValueRange, count: usize, precision: usize) -> Vec<String> {
    range
        .tick_values(count)
        .into_iter()
        .map(|v| format_tick(v, precision))
        .collect()
}
