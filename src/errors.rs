// errors.rs
use thiserror::Error;

/// Errors originating from the fallible edges of the crate
/// (dataset loading, config, spreadsheet export).
///
/// The query engine itself never fails: bad records degrade to zero
/// values or are dropped from project-dependent views.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

// Type alias commonly used by loaders and exporters.
pub type AppResult<T> = Result<T, AppError>;

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Xlsx(err.to_string())
    }
}
