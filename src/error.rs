//! Error types.
//!
//! One `thiserror` enum per layer. The engine only ever fails on malformed
//! input; store and preference failures are surfaced to the user and can be
//! retried. `EditorError` wraps all of them for the editing workflow.

/// Failure to run a filter.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("unsupported channel count {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),

    #[error("unknown filter index {0}")]
    UnknownFilter(usize),

    #[error("unknown filter name: {0}")]
    UnknownFilterName(String),

    /// A stage panicked; caught at the repository boundary.
    #[error("filter application failed: {0}")]
    Internal(String),
}

/// Failure to load or persist an image.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("file system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pixel buffer: {0}")]
    InvalidBuffer(String),
}

/// Failure to read or write the preferences file.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("preferences file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preferences encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors of the editing workflow.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("no image loaded")]
    NoImage,

    #[error("nothing to save")]
    NothingToSave,

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Preferences(#[from] PreferencesError),
}

/// Failure to load the application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
