//! Error handling for the splashgate CLI.
//!
//! Errors are layered the same way the commands are:
//! - **Top-level errors** (`CliError`) are what commands return
//! - **Domain errors** (`ConfigError`, `BuildError`) carry field names and hints
//! - Conversion is automatic via `#[from]`
//! - [`ResultExt`] attaches paths, hints or context at the call site
//!
//! At the binary edge, [`cli_error_to_miette`] turns a `CliError` into a
//! `miette::Report` for rendering.

mod miette;

pub use self::miette::cli_error_to_miette;

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (invalid values, unreadable file, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Build process errors
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Development server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Errors from the splash plugin
    #[error("Splash plugin error: {0}")]
    Splash(splashgate::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create a splashgate.config.json file or drop --config", .0.display())]
    NotFound(PathBuf),

    /// Config sources could not be merged or deserialized
    #[error("Failed to load configuration: {0}\n\nHint: Check splashgate.config.json syntax and field types")]
    Load(String),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Build process errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configured bundler command could not be started
    #[error("Failed to start bundler '{program}': {error}\n\nHint: Check 'build.command' in splashgate.config.json")]
    CommandSpawn {
        /// Program that failed to start
        program: String,
        /// Underlying error
        error: String,
    },

    /// The configured bundler command exited unsuccessfully
    #[error("Bundler command failed ({status}): {command}")]
    CommandFailed {
        /// Command line that was run
        command: String,
        /// Exit status as reported by the OS
        status: String,
    },

    /// Output directory resolves to a location that must not be written
    #[error("Refusing to write output to {}\n\nHint: Point --out-dir or outDir inside the project", .0.display())]
    OutputNotWritable(PathBuf),
}

/// Invalid config values keep their field and hint; everything else stays a
/// plugin error.
impl From<splashgate::Error> for CliError {
    fn from(err: splashgate::Error) -> Self {
        match err {
            splashgate::Error::InvalidConfig { field, value, hint } => {
                CliError::Config(ConfigError::InvalidValue { field, value, hint })
            }
            other => CliError::Splash(other),
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
