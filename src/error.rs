use thiserror::Error;

/// Errors surfaced by any syncstat operation.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable API key or target URL could be resolved, or the daemon's
    /// config file was present but unreadable.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client failure (connect, timeout, decode).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The daemon answered with a non-success status.
    #[error("remote error: {0}")]
    Remote(String),

    /// The daemon's own device ID is missing from its device list.
    #[error("self device {0} not present in device list")]
    SelfNotFound(String),

    /// A folder label did not resolve to any configured folder.
    #[error("no folder with label {0:?}")]
    FolderNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
