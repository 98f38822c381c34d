use thiserror::Error;

/// Errors raised while building a report in memory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate column `{0}`")]
    DuplicateColumn(String),
}

/// Errors raised while decoding a serialized statistics record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The record is not valid JSON.
    #[error("malformed statistics record: {0}")]
    Json(#[source] serde_json::Error),

    /// The record is JSON but does not match the column statistics shape.
    #[error("unexpected statistics record shape: {0}")]
    Shape(#[source] serde_json::Error),

    /// The same column name appears more than once.
    #[error("statistics record repeats column `{0}`")]
    DuplicateColumn(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => Self::Shape(err),
            _ => Self::Json(err),
        }
    }
}

impl From<ModelError> for DecodeError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::DuplicateColumn(name) => Self::DuplicateColumn(name),
        }
    }
}
