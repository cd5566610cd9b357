//! Error types for Folio

use thiserror::Error;

use crate::motion::MotionError;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Content or component was configured with unusable data
    /// (e.g. an empty slide list)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An animation or registration targeted an element that is no longer mounted
    #[error("Stale element: {0}")]
    StaleElement(String),

    /// The animation engine could not be initialized or stopped responding
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// General I/O error (reading a content file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<MotionError> for FolioError {
    fn from(err: MotionError) -> Self {
        match err {
            MotionError::StaleElement(id) => FolioError::StaleElement(id),
            MotionError::Unavailable(reason) => FolioError::ResourceUnavailable(reason),
        }
    }
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
