//! Miette diagnostic conversion for CLI errors.

use crate::error::{BuildError, CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(ConfigError::InvalidValue { field, value, hint }) => miette::miette!(
            help = hint,
            "Invalid value for '{}' in configuration: {}",
            field,
            value
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Splash(e) => miette::miette!("Splash plugin error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BuildError to miette Report
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::CommandFailed { command, status } => miette::miette!(
            help = "Run the command by hand to see the bundler's own output",
            "Bundler command failed ({}): {}",
            status,
            command
        ),
        _ => miette::miette!("{}", err),
    }
}
