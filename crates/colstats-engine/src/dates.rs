//! Date hint decoding.
//!
//! A hinted column is converted from text to milliseconds since the Unix
//! epoch (UTC) before aggregation, so min/median/mean/max come out on a
//! timestamp scale.

use chrono::format::ParseErrorKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseResult};
use polars::prelude::*;

use crate::error::EngineError;

/// Parse `value` with a chrono `format`.
///
/// Formats without a time component (e.g. `%Y-%m-%d`) parse as midnight.
pub fn parse_date(value: &str, format: &str) -> ParseResult<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(value, format) {
        Ok(datetime) => Ok(datetime),
        Err(err) if err.kind() == ParseErrorKind::NotEnough => {
            let date = NaiveDate::parse_from_str(value, format)?;
            Ok(date.and_time(NaiveTime::MIN))
        }
        Err(err) => Err(err),
    }
}

/// Epoch milliseconds for `value`, or `None` when it does not match `format`.
pub fn parse_epoch_millis(value: &str, format: &str) -> Option<i64> {
    parse_date(value.trim(), format)
        .ok()
        .map(|datetime| datetime.and_utc().timestamp_millis())
}

/// Convert a textual column into an `Int64` column of epoch milliseconds.
///
/// Values that do not match `format` become null.
///
/// # Errors
///
/// Returns [`EngineError::ColumnType`] if the column is not textual.
pub fn parse_as_date_column(column: &Column, format: &str) -> Result<Series, EngineError> {
    let series = column.as_materialized_series();
    let text = series.str().map_err(|_| EngineError::ColumnType {
        column: column.name().to_string(),
        dtype: column.dtype().to_string(),
    })?;
    let millis: Int64Chunked = text
        .into_iter()
        .map(|value| value.and_then(|value| parse_epoch_millis(value, format)))
        .collect();
    Ok(millis.with_name(column.name().clone()).into_series())
}
