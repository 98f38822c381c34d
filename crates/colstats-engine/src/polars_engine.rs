//! Polars-backed statistics engine.

use std::io::Cursor;

use polars::prelude::*;
use tracing::{debug, debug_span};

use colstats_model::{ColumnStatistics, DateHints, MetricValue, StatisticsReport};

use crate::StatisticsEngine;
use crate::dates::parse_as_date_column;
use crate::error::EngineError;

/// CSV reading options for [`PolarsEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Field separator byte.
    pub separator: u8,
    /// Rows scanned to infer column types; `None` scans every row.
    pub infer_schema_length: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            separator: b',',
            infer_schema_length: None,
        }
    }
}

/// Statistics engine that delegates parsing, type inference, and aggregation
/// to polars.
#[derive(Debug, Clone, Default)]
pub struct PolarsEngine {
    options: EngineOptions,
}

impl PolarsEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    fn read_frame(&self, text: &str) -> Result<DataFrame, EngineError> {
        let separator = self.options.separator;
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(self.options.infer_schema_length)
            .map_parse_options(|parse| parse.with_separator(separator))
            .into_reader_with_file_handle(Cursor::new(text.as_bytes()))
            .finish()
            .map_err(|e| EngineError::parse(e.to_string()))
    }
}

impl StatisticsEngine for PolarsEngine {
    fn describe(&self, text: &str, hints: &DateHints) -> Result<String, EngineError> {
        let span = debug_span!("describe", bytes = text.len(), date_hints = hints.len());
        let _guard = span.enter();

        let df = self.read_frame(text)?;
        debug!(rows = df.height(), columns = df.width(), "parsed table");

        let mut columns = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let name = column.name().to_string();
            let stats = match hints.format_for(&name) {
                Some(format) => column_stats(&parse_as_date_column(column, format)?),
                None => column_stats(column.as_materialized_series()),
            };
            debug!(column = %name, dtype = %column.dtype(), "described column");
            columns.push((name, stats));
        }

        let report = StatisticsReport::try_from_columns(columns)
            .map_err(|e| EngineError::internal(e.to_string()))?;
        Ok(serde_json::to_string(&report)?)
    }

    fn count_rows(&self, text: &str) -> Result<usize, EngineError> {
        Ok(self.read_frame(text)?.height())
    }
}

/// Statistics for one column, as polars computes them.
///
/// Value metrics come straight from polars: a dtype it cannot aggregate, or a
/// minimum it cannot express as a number, yields null.
fn column_stats(series: &Series) -> ColumnStatistics {
    ColumnStatistics {
        length: series.len() as u64,
        null_count: series.null_count() as u64,
        unique_count: series.n_unique().ok().map(|count| count as u64),
        min: series.min::<f64>().ok().flatten().map(MetricValue::Number),
        median: series.median().map(MetricValue::Number),
        mean: series.mean().map(MetricValue::Number),
        max: series.max::<f64>().ok().flatten().map(MetricValue::Number),
    }
}
