//! Configuration loading with multiple sources.
//!
//! Merges `splashgate.config.json` and `SPLASHGATE_*` environment variables
//! into a [`SplashConfig`]. Command flags are applied on top by each command.
//! Priority: CLI > Environment > File > Defaults

mod loading;

use std::path::PathBuf;

pub use loading::{load_config, resolve_project_root};
pub use splashgate::SplashConfig;

/// Prefix for environment overrides, e.g. `SPLASHGATE_SERVER__PORT=3000`.
pub const ENV_PREFIX: &str = "SPLASHGATE_";

/// Where configuration comes from, taken from the global CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    /// Project directory (`--cwd`); the current directory when unset
    pub cwd: Option<PathBuf>,

    /// Explicit config file (`--config`); must exist when set
    pub config: Option<PathBuf>,
}

impl ConfigSource {
    pub fn new(cwd: Option<PathBuf>, config: Option<PathBuf>) -> Self {
        Self { cwd, config }
    }
}
