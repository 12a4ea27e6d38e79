//! Tag rendering error types.

use thiserror::Error;

/// Errors from rendering an image tag.
#[derive(Debug, Error)]
pub enum TagError {
    /// The identifier is not in the image table.
    ///
    /// An identifier that trimmed to the empty string ends up here too;
    /// it is not a distinct error class.
    #[error("unknown image identifier `{0}`")]
    UnknownImage(String),

    /// The partial failed to render, or was never loaded.
    #[error(transparent)]
    Render(#[from] tera::Error),
}
