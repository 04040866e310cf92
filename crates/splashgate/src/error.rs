//! Error types for splash document delivery.
//!
//! Every variant carries the path involved so a failure can be reported
//! without further context from the caller.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, serving or copying the splash document.
#[derive(Debug, Error)]
pub enum Error {
    /// The splash document could not be read from its source location.
    #[error("Failed to read splash document '{}': {source}", .path.display())]
    Read {
        /// Source path that was read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The staged copy in the output directory could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        /// Path of the file being written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The staged copy could not be moved over the destination.
    #[error("Failed to rename '{}' to '{}': {source}", .from.display(), .to.display())]
    Persist {
        /// Staged file
        from: PathBuf,
        /// Final destination
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The splash path does not end in a file name, so no destination exists.
    #[error("Splash document path has no file name: {}", .0.display())]
    MissingFileName(PathBuf),

    /// A configuration value failed validation.
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidConfig {
        /// camelCase key of the offending field
        field: String,
        /// The rejected value
        value: String,
        /// How to fix it
        hint: String,
    },
}

/// Result alias for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failed splash request becomes a 500 for that request only.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_mentions_path() {
        let err = Error::Read {
            path: PathBuf::from("splashscreen.html"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("splashscreen.html"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_persist_error_mentions_both_paths() {
        let err = Error::Persist {
            from: PathBuf::from("dist/.splashscreen.html.tmp"),
            to: PathBuf::from("dist/splashscreen.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains(".splashscreen.html.tmp"));
        assert!(msg.contains("dist/splashscreen.html"));
    }

    #[test]
    fn test_invalid_config_has_hint() {
        let err = Error::InvalidConfig {
            field: "route".to_string(),
            value: "splash".to_string(),
            hint: "Routes start with '/'".to_string(),
        };
        assert!(err.to_string().contains("Hint: Routes start with '/'"));
    }

    #[test]
    fn test_into_response_is_server_error() {
        let err = Error::MissingFileName(PathBuf::from("/"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
