//! Metric identifiers and values.
//!
//! Metrics fall into two groups:
//! - **Count metrics** (`len`, `null_values`, `unique_values`): always integers.
//! - **Value-scale metrics** (`min`, `median`, `mean`, `max`): measured on the
//!   column's own scale, so they may be timestamps for date columns.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// One row of the statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Length,
    NullCount,
    UniqueCount,
    Min,
    Median,
    Mean,
    Max,
}

impl Metric {
    /// Metrics in display order.
    pub const ALL: [Metric; 7] = [
        Metric::Length,
        Metric::NullCount,
        Metric::UniqueCount,
        Metric::Min,
        Metric::Median,
        Metric::Mean,
        Metric::Max,
    ];

    /// Field name used in serialized records and as the table row label.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Length => "len",
            Metric::NullCount => "null_values",
            Metric::UniqueCount => "unique_values",
            Metric::Min => "min",
            Metric::Median => "median",
            Metric::Mean => "mean",
            Metric::Max => "max",
        }
    }

    /// Returns true for `min`, `median`, `mean`, and `max`.
    pub fn is_value_scale(self) -> bool {
        matches!(
            self,
            Metric::Min | Metric::Median | Metric::Mean | Metric::Max
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value-scale metric as reported by the engine.
///
/// Engines normally report numbers. Some report date metrics already
/// formatted, which are carried through as text. Whole numbers serialize
/// without a fractional part (`3`, not `3.0`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

/// Whole numbers below this magnitude are written as JSON integers.
const INTEGER_LIMIT: f64 = 9.2e18;

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Number(value) if value.fract() == 0.0 && value.abs() < INTEGER_LIMIT => {
                serializer.serialize_i64(*value as i64)
            }
            MetricValue::Number(value) => serializer.serialize_f64(*value),
            MetricValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(value) => Some(*value),
            MetricValue::Text(_) => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}
