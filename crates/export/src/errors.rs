use thiserror::Error;

/// Type alias for Result using our ExportError type.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while serializing calculation history.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
