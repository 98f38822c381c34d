//! Per-column statistics and the ordered report that holds them.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;
use crate::metric::{Metric, MetricValue};

/// Descriptive statistics for one column.
///
/// Every field must be present in a serialized record; `null` marks a metric
/// that is undefined for the column (for example the mean of a text column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    #[serde(rename = "len", alias = "length")]
    pub length: u64,
    #[serde(rename = "null_values", alias = "nullCount")]
    pub null_count: u64,
    #[serde(
        rename = "unique_values",
        alias = "uniqueCount",
        deserialize_with = "nullable"
    )]
    pub unique_count: Option<u64>,
    #[serde(deserialize_with = "nullable")]
    pub min: Option<MetricValue>,
    #[serde(deserialize_with = "nullable")]
    pub median: Option<MetricValue>,
    #[serde(deserialize_with = "nullable")]
    pub mean: Option<MetricValue>,
    #[serde(deserialize_with = "nullable")]
    pub max: Option<MetricValue>,
}

/// A single metric of a column, borrowed for formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricCell<'a> {
    Null,
    Count(u64),
    Value(&'a MetricValue),
}

impl ColumnStatistics {
    /// Look up one metric.
    pub fn metric(&self, metric: Metric) -> MetricCell<'_> {
        let value = match metric {
            Metric::Length => return MetricCell::Count(self.length),
            Metric::NullCount => return MetricCell::Count(self.null_count),
            Metric::UniqueCount => {
                return self.unique_count.map_or(MetricCell::Null, MetricCell::Count);
            }
            Metric::Min => self.min.as_ref(),
            Metric::Median => self.median.as_ref(),
            Metric::Mean => self.mean.as_ref(),
            Metric::Max => self.max.as_ref(),
        };
        value.map_or(MetricCell::Null, MetricCell::Value)
    }
}

// A plain `Option` field would accept a missing key; the record format
// requires the key with an explicit `null`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Column name to statistics, in source column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsReport {
    columns: Vec<(String, ColumnStatistics)>,
}

impl StatisticsReport {
    /// Build a report, rejecting repeated column names.
    pub fn try_from_columns<I>(columns: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (String, ColumnStatistics)>,
    {
        let columns: Vec<(String, ColumnStatistics)> = columns.into_iter().collect();
        let duplicate = {
            let mut seen = HashSet::with_capacity(columns.len());
            columns
                .iter()
                .map(|(name, _)| name.as_str())
                .find(|name| !seen.insert(*name))
                .map(str::to_string)
        };
        match duplicate {
            Some(name) => Err(ModelError::DuplicateColumn(name)),
            None => Ok(Self { columns }),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ColumnStatistics> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, stats)| stats)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnStatistics)> {
        self.columns.iter().map(|(name, stats)| (name.as_str(), stats))
    }
}

impl Serialize for StatisticsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, stats) in &self.columns {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

/// Map entries in document order, duplicates included.
pub(crate) struct OrderedEntries(pub(crate) Vec<(String, ColumnStatistics)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column names to column statistics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, stats)) = access.next_entry::<String, ColumnStatistics>()? {
                    entries.push((name, stats));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl<'de> Deserialize<'de> for StatisticsReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let OrderedEntries(entries) = OrderedEntries::deserialize(deserializer)?;
        StatisticsReport::try_from_columns(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(len: u64) -> ColumnStatistics {
        ColumnStatistics {
            length: len,
            null_count: 0,
            unique_count: Some(len),
            min: Some(MetricValue::Number(1.0)),
            median: Some(MetricValue::Number(2.0)),
            mean: Some(MetricValue::Number(2.0)),
            max: Some(MetricValue::Number(3.0)),
        }
    }

    #[test]
    fn keeps_column_order() {
        let report = StatisticsReport::try_from_columns(vec![
            ("zeta".to_string(), numeric(3)),
            ("alpha".to_string(), numeric(3)),
        ])
        .unwrap();
        let names: Vec<&str> = report.column_names().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn rejects_duplicate_columns() {
        let err = StatisticsReport::try_from_columns(vec![
            ("a".to_string(), numeric(1)),
            ("a".to_string(), numeric(2)),
        ])
        .unwrap_err();
        assert_eq!(err, ModelError::DuplicateColumn("a".to_string()));
    }

    #[test]
    fn wide_report_with_late_duplicate() {
        let mut columns: Vec<(String, ColumnStatistics)> = (0..20_000)
            .map(|index| (format!("c{index}"), numeric(1)))
            .collect();
        let report = StatisticsReport::try_from_columns(columns.clone()).unwrap();
        assert_eq!(report.len(), 20_000);

        columns.push(("c19999".to_string(), numeric(2)));
        let err = StatisticsReport::try_from_columns(columns).unwrap_err();
        assert_eq!(err, ModelError::DuplicateColumn("c19999".to_string()));
    }

    #[test]
    fn metric_lookup() {
        let mut stats = numeric(3);
        stats.unique_count = None;
        stats.mean = None;
        assert_eq!(stats.metric(Metric::Length), MetricCell::Count(3));
        assert_eq!(stats.metric(Metric::UniqueCount), MetricCell::Null);
        assert_eq!(stats.metric(Metric::Mean), MetricCell::Null);
        assert_eq!(
            stats.metric(Metric::Max),
            MetricCell::Value(&MetricValue::Number(3.0))
        );
    }

    #[test]
    fn serializes_in_order() {
        let report = StatisticsReport::try_from_columns(vec![
            ("b".to_string(), numeric(1)),
            ("a".to_string(), numeric(1)),
        ])
        .unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let b = json.find("\"b\"").unwrap();
        let a = json.find("\"a\"").unwrap();
        assert!(b < a);
    }
}
