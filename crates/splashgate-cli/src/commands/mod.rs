//! Command implementations for the splashgate CLI.
//!
//! - [`build`] - Run the bundler, then fire the build-completion hooks
//! - [`dev`] - Development server with plugin middleware
//! - [`check`] - Configuration validation
//!
//! Each command provides an `execute` function taking its parsed arguments
//! and the global [`ConfigSource`](crate::config::ConfigSource).

pub mod build;
pub mod check;
pub mod dev;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use dev::execute as dev_execute;
