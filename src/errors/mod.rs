//! Error handling module for the complaint core.
//!
//! Nothing in this system is fatal: missing identifiers are absorbed as
//! no-ops by the store and never reach this enum. Errors exist only for
//! persistence writes, serialization, presentation-boundary validation, and
//! clipboard denial.

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Required form field missing or empty
    Validation(String),
    /// Durable storage read/write failure
    Storage(String),
    /// Collection could not be serialized
    Serialization(String),
    /// System clipboard denied the write
    Clipboard(String),
}

impl AppError {
    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::Storage(msg) => msg,
            AppError::Serialization(msg) => msg,
            AppError::Clipboard(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Clipboard(_) => "CLIPBOARD_ERROR",
        };
        write!(f, "{}: {}", code, self.message())
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Storage error: {:?}", err);
        AppError::Storage(format!("Storage error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Serialization(format!("JSON error: {}", err))
    }
}
