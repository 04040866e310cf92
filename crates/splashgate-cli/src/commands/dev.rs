//! Development server command implementation.
//!
//! Loads configuration, applies `dev` flags, registers the plugins and serves
//! the project until Ctrl+C.

use crate::cli::DevArgs;
use crate::commands::utils;
use crate::config::{load_config, ConfigSource};
use crate::dev::{DevConfig, DevServer};
use crate::error::Result;
use crate::ui;

/// Execute the dev command.
///
/// A missing splash document is only a warning here: each request for it
/// fails on its own until the file appears.
///
/// # Errors
///
/// Returns errors for invalid configuration or when no port can be bound.
pub async fn execute(args: DevArgs, source: &ConfigSource) -> Result<()> {
    ui::info("Starting development server...");

    let base = load_config(source)?;
    let config = DevConfig::from_args(base, &args)?;
    config.base.validate()?;

    let splash = config.base.splash_path();
    if !splash.is_file() {
        ui::warning(&format!(
            "Splash document not found: {} (requests to {} will fail until it exists)",
            splash.display(),
            config.base.route
        ));
    }

    let plugins = utils::plugins_for(&config.base)?;
    ui::info(&format!(
        "Splash document {} served at {}{}",
        splash.display(),
        config.server_url(),
        config.base.route
    ));

    DevServer::new(config, plugins).start().await
}
