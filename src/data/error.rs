//! Data table error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading the image data table.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Image data file parsing error")]
    Toml(#[from] toml::de::Error),
}
