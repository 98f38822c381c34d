//! Readable JSON rendition of a report.

use crate::stats::StatisticsReport;

/// Pretty-print a report as two-space indented JSON, columns in report order.
pub fn raw_text(report: &StatisticsReport) -> String {
    // String keys and plain values; encoding does not fail in practice.
    serde_json::to_string_pretty(report).unwrap_or_else(|_| String::from("{}"))
}
