//! Error types for `paramwire-inspect`.

use camino::Utf8PathBuf;
use paramwire::WireError;
use thiserror::Error;

/// Errors surfaced by the inspection pipeline.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Loading or reading the document failed.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// Rendering the JSON report failed.
    #[error("failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering the text report failed.
    #[error("failed to render text report")]
    Render(#[from] std::fmt::Error),

    /// A `--composite` value was not `TAG:CHILD`.
    #[error("invalid composite target '{0}'; expected TAG:CHILD")]
    InvalidCompositeTarget(String),

    /// Writing the report failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Destination being written.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
}
