//! Column statistics model shared by the engine, renderer, and CLI.
//!
//! A [`StatisticsReport`] is produced by decoding the JSON record returned by a
//! statistics engine ([`decode_report`]) and can be turned back into readable
//! JSON with [`raw_text`].

pub mod decode;
pub mod error;
pub mod hints;
pub mod metric;
pub mod raw;
pub mod stats;

pub use decode::decode_report;
pub use error::{DecodeError, ModelError};
pub use hints::DateHints;
pub use metric::{Metric, MetricValue};
pub use raw::raw_text;
pub use stats::{ColumnStatistics, MetricCell, StatisticsReport};
