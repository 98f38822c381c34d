//! Cell formatting rules.
//!
//! - Undefined metric: [`NULL_MARKER`].
//! - Count metric: the integer in decimal.
//! - Value-scale metric on a date column: ISO-8601 UTC with milliseconds.
//!   Text passes through unchanged.
//! - Value-scale metric on any other column: two decimal places.

use chrono::{DateTime, Utc};

use colstats_model::{Metric, MetricCell, MetricValue};

/// Placeholder shown for an undefined metric.
pub const NULL_MARKER: &str = "␀";

/// Largest magnitude accepted as epoch milliseconds (±100,000,000 days).
const MAX_DATE_MILLIS: f64 = 8.64e15;

/// Format one metric of one column.
pub fn format_cell(metric: Metric, cell: MetricCell<'_>, is_date_column: bool) -> String {
    match cell {
        MetricCell::Null => NULL_MARKER.to_string(),
        MetricCell::Count(count) => count.to_string(),
        MetricCell::Value(MetricValue::Text(text)) => text.clone(),
        MetricCell::Value(MetricValue::Number(value)) => {
            if is_date_column && metric.is_value_scale() {
                format_date_millis(*value).unwrap_or_else(|| format_fixed2(*value))
            } else {
                format_fixed2(*value)
            }
        }
    }
}

/// Magnitude from which numbers print in exponent form instead of fixed point.
const FIXED_LIMIT: f64 = 1e21;

/// Round to exactly two decimal places.
///
/// Rounding works on the exact binary value and sends exact halves away from
/// zero, so `1.125` prints as `1.13` and `-1.125` as `-1.13`. Magnitudes of
/// `1e21` and above print as the shortest exponent form (`1e+21`).
pub fn format_fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= FIXED_LIMIT {
        return format!("{value:e}").replacen('e', "e+", 1);
    }

    // -0.0 prints unsigned.
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // An exact half of a hundredth is j/8 for odd j; `{:.2}` would round it
    // to even.
    let eighths = magnitude * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let eighths = eighths as u64;
        let hundredths = (eighths * 25 + 1) / 2;
        return format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }
    format!("{sign}{magnitude:.2}")
}

/// Format epoch milliseconds as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// Fractional milliseconds truncate toward zero. Returns `None` for values
/// outside the representable date range.
pub fn format_date_millis(millis: f64) -> Option<String> {
    if !millis.is_finite() || millis.abs() > MAX_DATE_MILLIS {
        return None;
    }
    let datetime = DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64)?;
    Some(datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> MetricValue {
        MetricValue::Number(value)
    }

    #[test]
    fn epoch_on_date_column() {
        let value = number(0.0);
        assert_eq!(
            format_cell(Metric::Min, MetricCell::Value(&value), true),
            "1970-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn epoch_on_plain_column() {
        let value = number(0.0);
        assert_eq!(
            format_cell(Metric::Min, MetricCell::Value(&value), false),
            "0.00"
        );
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn mean_rounds_to_two_places() {
        let value = number(3.14159);
        assert_eq!(
            format_cell(Metric::Mean, MetricCell::Value(&value), false),
            "3.14"
        );
        let value = number(2.0);
        assert_eq!(
            format_cell(Metric::Mean, MetricCell::Value(&value), false),
            "2.00"
        );
    }

    #[test]
    fn zero_count_is_not_null() {
        assert_eq!(
            format_cell(Metric::UniqueCount, MetricCell::Count(0), false),
            "0"
        );
        assert_eq!(
            format_cell(Metric::UniqueCount, MetricCell::Null, false),
            NULL_MARKER
        );
    }

    #[test]
    fn counts_ignore_date_hint() {
        assert_eq!(format_cell(Metric::Length, MetricCell::Count(12), true), "12");
    }

    #[test]
    fn text_passes_through() {
        let value = MetricValue::Text("2024-03-01".to_string());
        assert_eq!(
            format_cell(Metric::Max, MetricCell::Value(&value), true),
            "2024-03-01"
        );
        assert_eq!(
            format_cell(Metric::Max, MetricCell::Value(&value), false),
            "2024-03-01"
        );
    }

    #[test]
    fn date_millis_truncate() {
        assert_eq!(
            format_date_millis(1_500.9).as_deref(),
            Some("1970-01-01T00:00:01.500Z")
        );
        assert_eq!(
            format_date_millis(1_704_067_200_000.0).as_deref(),
            Some("2024-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn out_of_range_date_falls_back_to_number() {
        let value = number(1e20);
        assert_eq!(format_date_millis(1e20), None);
        assert_eq!(
            format_cell(Metric::Max, MetricCell::Value(&value), true),
            format_fixed2(1e20)
        );
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(format_fixed2(1.125), "1.13");
        assert_eq!(format_fixed2(0.125), "0.13");
        assert_eq!(format_fixed2(-1.125), "-1.13");
        assert_eq!(format_fixed2(2.625), "2.63");
        assert_eq!(format_fixed2(0.875), "0.88");
        assert_eq!(format_fixed2(-0.375), "-0.38");
        assert_eq!(format_fixed2(1_048_576.625), "1048576.63");
    }

    #[test]
    fn mean_of_eighths_rounds_up() {
        // Mean of eight integers summing to nine.
        let value = number(9.0 / 8.0);
        assert_eq!(
            format_cell(Metric::Mean, MetricCell::Value(&value), false),
            "1.13"
        );
    }

    #[test]
    fn near_halves_round_to_nearest() {
        // 1.005 and 2.675 sit just below the half in binary.
        assert_eq!(format_fixed2(1.005), "1.00");
        assert_eq!(format_fixed2(2.675), "2.67");
        assert_eq!(format_fixed2(1.5), "1.50");
        assert_eq!(format_fixed2(0.25), "0.25");
    }

    #[test]
    fn huge_magnitudes_use_exponent_form() {
        assert_eq!(format_fixed2(1e21), "1e+21");
        assert_eq!(format_fixed2(1.5e21), "1.5e+21");
        assert_eq!(format_fixed2(-2e22), "-2e+22");
        assert_eq!(format_fixed2(1e20), "100000000000000000000.00");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_fixed2(f64::NAN), "NaN");
        assert_eq!(format_fixed2(f64::INFINITY), "Infinity");
        assert_eq!(format_fixed2(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(format_fixed2(-0.0), "0.00");
        assert_eq!(format_fixed2(-1.256), "-1.26");
    }
}
