use thiserror::Error;

/// Errors that can occur while wiring or configuring a snap controller
#[derive(Error, Debug)]
pub enum SnapError {
    #[error("Configuration error: container has no child pages")]
    NoPages,

    #[error("Configuration error: no scroll container was provided")]
    MissingContainer,

    #[error("Page index {index} out of range (page count: {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Visible anchor count {visible} does not match page count {pages}")]
    AnchorCountMismatch { visible: usize, pages: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnapError>;
