// src/error.rs

use std::fmt;

/// Global Application Error Enum.
/// Every fallible operation in the crate returns this type.
#[derive(Debug)]
pub enum AppError {
    // Sanitizer options or environment settings that cannot be used
    InvalidConfig(String),

    // Form payload that is malformed or fails validation
    BadRequest(String),

    // Reading input or writing output failed
    Io(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts validation failures into `AppError::BadRequest`.
/// Allows using `?` after `Validate::validate`.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
