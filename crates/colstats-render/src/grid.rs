//! Projection of a report into a grid of formatted cells.

use tracing::trace;

use colstats_model::{DateHints, Metric, StatisticsReport};

use crate::format::format_cell;

/// A fully formatted statistics table.
///
/// The header row starts with an empty label cell followed by one cell per
/// data column. Each data row starts with the metric label. Rows follow
/// [`Metric::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsGrid {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl StatisticsGrid {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, excluding the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns including the label column.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Formatted value of `metric` for the data column named `column`.
    pub fn cell(&self, metric: Metric, column: &str) -> Option<&str> {
        let col = self
            .header
            .iter()
            .skip(1)
            .position(|name| name == column)?
            + 1;
        let row = Metric::ALL.iter().position(|m| *m == metric)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// Render `report` into a grid.
///
/// Value-scale metrics of columns named in `hints` render as dates; `None`
/// renders every column as plain numbers.
pub fn render_grid(report: &StatisticsReport, hints: Option<&DateHints>) -> StatisticsGrid {
    let is_date = |column: &str| hints.is_some_and(|hints| hints.is_date_column(column));

    let mut header = Vec::with_capacity(report.len() + 1);
    header.push(String::new());
    header.extend(report.column_names().map(str::to_string));

    let rows = Metric::ALL
        .iter()
        .map(|&metric| {
            let mut row = Vec::with_capacity(report.len() + 1);
            row.push(metric.as_str().to_string());
            for (column, stats) in report.iter() {
                row.push(format_cell(metric, stats.metric(metric), is_date(column)));
            }
            row
        })
        .collect();

    trace!(columns = report.len(), "rendered statistics grid");
    StatisticsGrid { header, rows }
}
