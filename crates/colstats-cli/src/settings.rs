//! User settings loaded from a TOML file.
//!
//! ```toml
//! [date_columns]
//! date = "%Y-%m-%d"
//!
//! [display]
//! view = "both"
//! table_width = 120
//!
//! [engine]
//! separator = ","
//! max_file_bytes = 524288000
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use colstats_engine::EngineOptions;
use colstats_model::DateHints;
use colstats_render::DEFAULT_TABLE_WIDTH;

use crate::loader::DEFAULT_MAX_FILE_BYTES;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("separator must be a single ASCII character, got {0:?}")]
    Separator(char),
}

/// Which display surfaces are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Table,
    Raw,
    #[default]
    Both,
}

impl ViewMode {
    pub fn shows_table(self) -> bool {
        matches!(self, ViewMode::Table | ViewMode::Both)
    }

    pub fn shows_raw(self) -> bool {
        matches!(self, ViewMode::Raw | ViewMode::Both)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Column name to chrono date format.
    pub date_columns: DateHints,
    pub display: DisplaySettings,
    pub engine: EngineSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub view: ViewMode,
    pub table_width: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            view: ViewMode::default(),
            table_width: DEFAULT_TABLE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub separator: char,
    /// Rows scanned for type inference; unset scans the whole file.
    pub infer_schema_rows: Option<usize>,
    pub max_file_bytes: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            separator: ',',
            infer_schema_rows: None,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

impl Settings {
    /// Load settings from `path`. Missing keys take their defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, SettingsError> {
        path.map_or_else(|| Ok(Self::default()), Self::load_from)
    }

    pub fn engine_options(&self) -> Result<EngineOptions, SettingsError> {
        let separator = self.engine.separator;
        if !separator.is_ascii() {
            return Err(SettingsError::Separator(separator));
        }
        Ok(EngineOptions {
            separator: separator as u8,
            infer_schema_length: self.engine.infer_schema_rows,
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected NAME=FORMAT, got `{0}`")]
pub struct HintParseError(String);

/// Parse a `NAME=FORMAT` date hint argument.
///
/// Splits on the first `=`, so formats may contain `=`.
pub fn parse_date_hint(arg: &str) -> Result<(String, String), HintParseError> {
    match arg.split_once('=') {
        Some((name, format)) if !name.trim().is_empty() && !format.is_empty() => {
            Ok((name.trim().to_string(), format.to_string()))
        }
        _ => Err(HintParseError(arg.to_string())),
    }
}
