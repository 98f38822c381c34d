//! Per-column date decoding hints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column name to a chrono format string such as `%Y-%m-%d`.
///
/// A column without a hint is treated as non-date. Hints are not validated:
/// a format that matches nothing leaves the column's values null, and a hint
/// for a column that does not exist is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateHints(BTreeMap<String, String>);

impl DateHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, format: impl Into<String>) {
        self.0.insert(column.into(), format.into());
    }

    /// Add every hint from `other`, replacing existing formats.
    pub fn extend(&mut self, other: DateHints) {
        self.0.extend(other.0);
    }

    pub fn format_for(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn is_date_column(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DateHints {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_overrides() {
        let mut hints: DateHints = [("date", "%Y-%m-%d")].into_iter().collect();
        hints.extend([("date", "%d/%m/%Y"), ("ts", "%s")].into_iter().collect());
        assert_eq!(hints.format_for("date"), Some("%d/%m/%Y"));
        assert!(hints.is_date_column("ts"));
        assert!(!hints.is_date_column("price"));
        assert_eq!(hints.len(), 2);
    }
}
