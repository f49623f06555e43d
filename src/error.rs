//! Error types for Magview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Magview operations.
pub type Result<T> = std::result::Result<T, MagviewError>;

/// Errors that can occur in Magview.
#[derive(Debug, Error)]
pub enum MagviewError {
    /// The requested rendering backend cannot be used in this environment.
    #[error("Backend unavailable: {name} ({reason})")]
    BackendUnavailable {
        /// Backend name as requested.
        name: String,
        /// Why it cannot be used.
        reason: String,
    },

    /// A backend was configured after plotting objects were created.
    #[error("Backend must be configured before any figure is created")]
    BackendLocked,

    /// The figure already holds its 3D axes.
    #[error("Figure already has a 3D subplot")]
    SubplotExists,

    /// Drawing the chart failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Writing an exported image failed.
    #[error("Failed to export {path}: {message}")]
    Export {
        /// Target file.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MagviewError {
    /// Create a BackendUnavailable error.
    pub fn backend_unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an Export error.
    pub fn export(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Export {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a Render error from any drawing failure.
    pub fn render(err: impl ToString) -> Self {
        Self::Render(err.to_string())
    }

    /// Whether this error means no backend can draw here.
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_unavailable_message_names_backend() {
        let err = MagviewError::backend_unavailable("gtk", "unknown backend");
        assert_eq!(err.to_string(), "Backend unavailable: gtk (unknown backend)");
        assert!(err.is_backend_unavailable());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: MagviewError = io.into();
        assert!(matches!(err, MagviewError::Io(_)));
        assert!(!err.is_backend_unavailable());
    }
}
