use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchCollectorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Patch detail not found: {0}")]
    DetailNotFound(u64),

    #[error("Invalid --since value '{0}' (use YYYY-MM-DD, YYYY/MM/DD or ISO 8601 like 2025-09-10T12:00:00Z)")]
    InvalidSince(String),
}

pub type Result<T> = std::result::Result<T, PatchCollectorError>;
