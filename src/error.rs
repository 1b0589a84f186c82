use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local input check failed before anything was sent to the server.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
