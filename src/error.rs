//! Error types and handling infrastructure for termfolio.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should provide actionable feedback
//! - **Content is data, not errors**: malformed headers and lookup misses never
//!   produce an error variant; only real IO/config/terminal failures do
//! - **Consistency**: Standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for termfolio operations.
///
/// This enum covers the error conditions that can occur during content
/// discovery, document loading, preferences handling and terminal setup.
#[derive(Error, Debug)]
pub enum FolioError {
    /// File system related errors (read failures, permission denied, etc.)
    #[error("Content operation failed: {message}")]
    ContentError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Content root missing entirely (common case for user feedback)
    #[error("Content directory not found: {path}")]
    ContentDirNotFound { path: PathBuf },

    /// Path exists but is not a directory
    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Message catalog could not be parsed
    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Preferences file related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for termfolio operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the termfolio codebase.
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create a ContentError from an io::Error with additional context
    pub fn content_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::ContentError {
            message: message.into(),
            source,
        }
    }

    /// Create a CatalogError with a descriptive message
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::CatalogError {
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to FolioError
impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                // For NotFound, we lose the specific path context here,
                // but it can be added at the call site with the path variants
                Self::ContentError {
                    message: "File not found".to_string(),
                    source: err,
                }
            }
            std::io::ErrorKind::PermissionDenied => Self::ContentError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::ContentError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_messages() {
        let path = PathBuf::from("/test/content");

        let dir_not_found = FolioError::ContentDirNotFound { path: path.clone() };
        assert_eq!(
            dir_not_found.to_string(),
            "Content directory not found: /test/content"
        );

        let not_a_dir = FolioError::NotADirectory { path: path.clone() };
        assert_eq!(not_a_dir.to_string(), "Path is not a directory: /test/content");

        let catalog_error = FolioError::catalog("missing locale table");
        assert_eq!(catalog_error.to_string(), "Catalog error: missing locale table");
    }

    #[test]
    fn test_error_constructors() {
        let ui_err = FolioError::ui("Terminal resize failed");
        matches!(ui_err, FolioError::UIError { .. });

        let config_err = FolioError::config("bad language code");
        matches!(config_err, FolioError::ConfigError { .. });

        let other_err = FolioError::other("Unknown error");
        matches!(other_err, FolioError::Other { .. });
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let folio_err: FolioError = io_err.into();

        match folio_err {
            FolioError::ContentError { message, .. } => {
                assert_eq!(message, "File not found");
            }
            _ => panic!("Expected ContentError variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        let result = returns_result();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "success");
    }
}
