//! # Elevated Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Elevated CLI and
//! HTTP service. The intent matcher itself is total and never produces an
//! error; everything around it (configuration, template rendering, request
//! validation) reports failures through the types below.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `AppError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The HTTP layer downcasts to `AppError` to choose a status code, so request
//! validation failures must be raised as `AppError` values rather than plain
//! `anyhow!` strings.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if request.name.trim().is_empty() {
//!     return Err(AppError::InvalidRequest("Missing required fields: email, name, type".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Elevated application.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A caller-supplied payload was incomplete or malformed.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Invalid email type: '{kind}'")]
    UnknownEmailType { kind: String },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },
}

impl AppError {
    /// Whether the error was caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidRequest(_) | AppError::UnknownEmailType { .. }
        )
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = AppError::Config("support_email must not be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: support_email must not be empty"
        );

        let invalid = AppError::InvalidRequest("Missing required fields: email, name, type".into());
        assert_eq!(
            invalid.to_string(),
            "Missing required fields: email, name, type"
        );

        let unknown = AppError::UnknownEmailType {
            kind: "newsletter".into(),
        };
        assert_eq!(unknown.to_string(), "Invalid email type: 'newsletter'");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::InvalidRequest("x".into()).is_client_error());
        assert!(AppError::UnknownEmailType { kind: "x".into() }.is_client_error());
        assert!(!AppError::Config("x".into()).is_client_error());
    }
}
