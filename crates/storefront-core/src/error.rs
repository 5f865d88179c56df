//! Error types for the storefront design system

use thiserror::Error;

/// Main error type for storefront shell operations.
///
/// Components themselves never fail; only configuration and logging setup
/// can produce one of these.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Configuration file was missing or held invalid values
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a configuration file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A global tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using StorefrontError
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::Config("currency_symbol is empty".to_string());
        assert_eq!(format!("{}", err), "Config error: currency_symbol is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StorefrontError = io_err.into();
        assert!(matches!(err, StorefrontError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StorefrontError = json_err.into();
        assert!(matches!(err, StorefrontError::Json(_)));
    }
}
