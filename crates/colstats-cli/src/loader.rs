//! Reading selected files into memory.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Default upper bound on file size (500 MB).
pub const DEFAULT_MAX_FILE_BYTES: u64 = 500 * 1024 * 1024;

/// Storage access failure while reading a selected file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    TooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

/// Produces the full text contents of a selected file.
pub trait FileLoader: Send + Sync {
    fn read_text(&self, path: &Path) -> Result<String, ReadError>;
}

/// Reads files from the local filesystem as UTF-8 text. Invalid byte
/// sequences become U+FFFD instead of failing the read.
#[derive(Debug, Clone, Copy)]
pub struct FsLoader {
    max_bytes: u64,
}

impl Default for FsLoader {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

impl FsLoader {
    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl FileLoader for FsLoader {
    fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        let io_error = |source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        };
        let size = std::fs::metadata(path).map_err(io_error)?.len();
        if size > self.max_bytes {
            return Err(ReadError::TooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_bytes,
            });
        }
        let bytes = std::fs::read(path).map_err(io_error)?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path.display(), "file is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        debug!(path = %path.display(), bytes = text.len(), "read file");
        Ok(text)
    }
}
