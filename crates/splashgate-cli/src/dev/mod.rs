//! Development server module.
//!
//! Serves the project directory as static files, with every registered
//! plugin given a chance to install middleware in front of it.

pub mod config;
pub mod server;

pub use config::DevConfig;
pub use server::DevServer;
