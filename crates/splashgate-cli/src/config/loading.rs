use crate::config::{ConfigSource, SplashConfig, ENV_PREFIX};
use crate::error::{CliError, ConfigError, Result, ResultExt};
use figment::{
    providers::{Env, Format as _, Json},
    Figment,
};
use splashgate::config::CONFIG_FILE;
use std::path::{Component, Path, PathBuf};

/// Load and validate the project configuration.
///
/// The project directory is `--cwd` or the current directory. The config file
/// is `--config` when given (relative to the current directory), otherwise
/// `splashgate.config.json` in the project directory if present. The loaded
/// `root` is resolved against the project directory, so the returned
/// config's paths are absolute.
///
/// # Errors
///
/// - [`ConfigError::NotFound`] if an explicit `--config` file is missing
/// - [`ConfigError::Load`] if a source cannot be parsed or has unknown keys
/// - [`ConfigError::InvalidValue`] if validation fails
pub fn load_config(source: &ConfigSource) -> Result<SplashConfig> {
    let project_dir = resolve_project_root(source.cwd.as_deref())?;

    let config_file = match &source.config {
        Some(explicit) => {
            let path = absolute(explicit)?;
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            Some(path)
        }
        None => {
            let default_path = project_dir.join(CONFIG_FILE);
            default_path.is_file().then_some(default_path)
        }
    };

    let mut figment = Figment::new();

    if let Some(path) = &config_file {
        tracing::debug!("Loading configuration from {}", path.display());
        figment = figment.merge(Json::file(path));
    }

    // SPLASHGATE_ROUTE, SPLASHGATE_SERVER__PORT, SPLASHGATE_OUTDIR, ...
    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .split("__")
            .map(|key| env_key(key.as_str()).into())
            .lowercase(false),
    );

    let mut config: SplashConfig = figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    if config.root.is_relative() {
        config.root = resolve_root(project_dir, &config.root);
    }

    config.validate()?;

    Ok(config)
}

/// Resolve the project directory from an optional `--cwd` flag.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] if the directory does not exist or
/// is not a directory.
pub fn resolve_project_root(explicit_cwd: Option<&Path>) -> Result<PathBuf> {
    let Some(cwd) = explicit_cwd else {
        return current_dir();
    };

    let path = absolute(cwd)?;

    if !path.exists() {
        return Err(CliError::InvalidArgument(format!(
            "Specified --cwd directory does not exist: {}",
            path.display()
        )));
    }

    if !path.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Specified --cwd is not a directory: {}",
            path.display()
        )));
    }

    tracing::debug!("Using project root: {}", path.display());
    Ok(path)
}

/// Config key path for an environment variable name without its prefix.
///
/// Matching is case-insensitive; camelCase keys get their casing back.
fn env_key(key: &str) -> String {
    key.to_ascii_lowercase()
        .split('.')
        .map(|segment| match segment {
            "outdir" => "outDir",
            "strictport" => "strictPort",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Join a relative `root` onto the project directory, dropping `.` segments.
fn resolve_root(project_dir: PathBuf, root: &Path) -> PathBuf {
    let relative: PathBuf = root
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if relative.as_os_str().is_empty() {
        project_dir
    } else {
        project_dir.join(relative)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(current_dir()?.join(path))
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}
