//! Partial loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading the includes directory.
#[derive(Debug, Error)]
pub enum PartialsError {
    #[error("Includes path `{0}` is not valid UTF-8")]
    NonUtf8Path(PathBuf),

    #[error("Partial template parsing error")]
    Template(#[from] tera::Error),
}
