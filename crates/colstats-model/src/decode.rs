//! Decoding of serialized statistics records.

use crate::error::DecodeError;
use crate::stats::{OrderedEntries, StatisticsReport};

/// Decode a JSON statistics record into a [`StatisticsReport`].
///
/// The top level must be an object keyed by column name. Each value must carry
/// every column statistics field; `null` is accepted where a metric may be
/// undefined. Unknown extra fields are ignored.
///
/// # Errors
///
/// - [`DecodeError::Json`] when the text is not JSON.
/// - [`DecodeError::Shape`] when the JSON does not match the record shape.
/// - [`DecodeError::DuplicateColumn`] when a column name repeats.
pub fn decode_report(record: &str) -> Result<StatisticsReport, DecodeError> {
    let OrderedEntries(entries) = serde_json::from_str(record)?;
    Ok(StatisticsReport::try_from_columns(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::MetricValue;

    #[test]
    fn decodes_wire_names() {
        let report = decode_report(
            r#"{"price":{"len":4,"null_values":1,"unique_values":3,"min":1.5,"median":2.0,"mean":2.25,"max":3}}"#,
        )
        .unwrap();
        let price = report.get("price").unwrap();
        assert_eq!(price.length, 4);
        assert_eq!(price.null_count, 1);
        assert_eq!(price.unique_count, Some(3));
        assert_eq!(price.max, Some(MetricValue::Number(3.0)));
    }

    #[test]
    fn decodes_camel_case_aliases() {
        let report = decode_report(
            r#"{"a":{"length":2,"nullCount":0,"uniqueCount":null,"min":null,"median":null,"mean":null,"max":null}}"#,
        )
        .unwrap();
        let a = report.get("a").unwrap();
        assert_eq!(a.length, 2);
        assert_eq!(a.unique_count, None);
    }

    #[test]
    fn missing_field_is_shape_error() {
        let err = decode_report(r#"{"a":{"len":2,"null_values":0}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)), "{err:?}");
    }

    #[test]
    fn missing_nullable_field_is_shape_error() {
        let err = decode_report(
            r#"{"a":{"len":2,"null_values":0,"unique_values":2,"min":1,"median":1,"mean":1}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)), "{err:?}");
    }

    #[test]
    fn wrong_type_is_shape_error() {
        let err = decode_report(
            r#"{"a":{"len":"two","null_values":0,"unique_values":2,"min":1,"median":1,"mean":1,"max":1}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)), "{err:?}");
    }

    #[test]
    fn top_level_array_is_shape_error() {
        let err = decode_report("[]").unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)), "{err:?}");
    }

    #[test]
    fn invalid_json_is_json_error() {
        let err = decode_report("{\"a\":").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)), "{err:?}");
    }

    #[test]
    fn duplicate_column_is_reported() {
        let column = r#"{"len":1,"null_values":0,"unique_values":1,"min":null,"median":null,"mean":null,"max":null}"#;
        let err = decode_report(&format!("{{\"a\":{column},\"a\":{column}}}")).unwrap_err();
        assert!(matches!(err, DecodeError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn empty_object_is_empty_report() {
        let report = decode_report("{}").unwrap();
        assert!(report.is_empty());
    }
}
