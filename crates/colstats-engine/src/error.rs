//! Engine failures. Display text is the message shown to the user.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The text could not be read as delimited tabular data.
    #[error("{0}")]
    Parse(String),

    /// A date hint named a column that is not textual.
    #[error("date column `{column}` must be text, found {dtype}")]
    ColumnType { column: String, dtype: String },

    /// Aggregation or serialization failed inside the engine.
    #[error("{0}")]
    Internal(String),
}

impl EngineError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<polars::prelude::PolarsError> for EngineError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
