//! splashgate CLI - host for the splash document plugin.
//!
//! Stands in for a bundler's serve and build lifecycles so the
//! [`splashgate`] plugin can run against a real project:
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Multi-source configuration loading with `figment`
//! - [`dev`] - axum development server with plugin middleware
//! - `commands` - `dev`, `build` and `check`
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - `tracing` subscriber setup
//! - [`ui`] - Status lines and summaries on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use splashgate_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dev;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
