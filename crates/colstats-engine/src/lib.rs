//! The column statistics engine boundary.
//!
//! The pipeline never computes statistics itself. It hands raw delimited text
//! to a [`StatisticsEngine`] and receives a JSON-encoded record back, which
//! `colstats_model::decode_report` turns into a report.
//!
//! [`PolarsEngine`] is the shipped implementation: polars parses the text,
//! infers column types, and computes every aggregate.

pub mod dates;
pub mod error;
pub mod polars_engine;

pub use colstats_model::DateHints;
pub use error::EngineError;
pub use polars_engine::{EngineOptions, PolarsEngine};

/// Computes per-column descriptive statistics for tabular text.
pub trait StatisticsEngine {
    /// Describe every column of `text`, returning a JSON statistics record.
    ///
    /// `hints` name columns whose values are dates in the given format; the
    /// engine decodes them to epoch milliseconds before aggregating. Hints are
    /// passed through unvalidated.
    fn describe(&self, text: &str, hints: &DateHints) -> Result<String, EngineError>;

    /// Count the data rows of `text`.
    fn count_rows(&self, text: &str) -> Result<usize, EngineError>;
}

impl<E: StatisticsEngine + ?Sized> StatisticsEngine for &E {
    fn describe(&self, text: &str, hints: &DateHints) -> Result<String, EngineError> {
        (**self).describe(text, hints)
    }

    fn count_rows(&self, text: &str) -> Result<usize, EngineError> {
        (**self).count_rows(text)
    }
}
