//! Application Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Web storage missing or rejecting writes
    #[error("storage unavailable: {0}")]
    Storage(String),
    /// Stored or fetched data could not be decoded
    #[error("corrupt data: {0}")]
    Corrupt(String),
    #[error("http status {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    /// Carries the translation key of the validation message
    #[error("invalid answer: {0}")]
    InvalidAnswer(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Corrupt(err.to_string())
    }
}
