//! Shared utilities for command implementations.

use crate::config::SplashConfig;
use crate::error::{BuildError, CliError, Result, ResultExt};
use splashgate::{PluginContainer, SplashPlugin};
use std::fs;
use std::path::Path;

/// Register the plugins a project runs with.
pub fn plugins_for(config: &SplashConfig) -> Result<PluginContainer> {
    let mut plugins = PluginContainer::new();
    plugins.register(SplashPlugin::new(config)?);
    tracing::debug!("Registered plugins: {:?}", plugins.names());
    Ok(plugins)
}

/// Ensure an output directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns I/O errors if directory creation fails, or
/// [`CliError::InvalidArgument`] if the path exists but is not a directory.
pub fn ensure_output_dir(out_dir: &Path) -> Result<()> {
    if !out_dir.exists() {
        fs::create_dir_all(out_dir)?;
    } else if !out_dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Output path exists but is not a directory: {}",
            out_dir.display()
        )));
    }

    Ok(())
}

/// Refuse output directories that resolve into system locations.
///
/// The check runs on the canonical path (or its parent's when the directory
/// does not exist yet), so `..` segments and symlinks cannot sneak past it.
///
/// # Errors
///
/// Returns [`BuildError::OutputNotWritable`] for unsafe locations.
pub fn validate_output_dir(out_dir: &Path) -> Result<()> {
    let canonical_out = if out_dir.exists() {
        out_dir.canonicalize().with_path(out_dir)?
    } else {
        let (Some(parent), Some(name)) = (out_dir.parent(), out_dir.file_name()) else {
            return Err(BuildError::OutputNotWritable(out_dir.to_path_buf()).into());
        };
        match parent.canonicalize() {
            Ok(parent) => parent.join(name),
            // Parent missing too: nothing on disk to protect yet.
            Err(_) => out_dir.to_path_buf(),
        }
    };

    const DANGEROUS_PATHS: &[&str] = &[
        "/bin", "/boot", "/dev", "/etc", "/lib", "/lib64", "/proc", "/sbin", "/sys",
        "/usr/bin", "/usr/lib", "/usr/sbin", "/var/log",
    ];

    if canonical_out == Path::new("/")
        || DANGEROUS_PATHS
            .iter()
            .any(|dangerous| canonical_out.starts_with(dangerous))
    {
        return Err(BuildError::OutputNotWritable(canonical_out).into());
    }

    Ok(())
}

/// Render a command line for messages.
pub fn display_command(command: &[String]) -> String {
    command
        .iter()
        .map(|arg| {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                format!("{arg:?}")
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_output_dir_creates() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("dist/nested");

        ensure_output_dir(&out_dir).unwrap();
        assert!(out_dir.is_dir());

        // Existing directory is fine
        ensure_output_dir(&out_dir).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("dist");
        fs::write(&file, "").unwrap();

        assert!(ensure_output_dir(&file).is_err());
    }

    #[test]
    fn test_validate_output_dir_accepts_project_dirs() {
        let temp = TempDir::new().unwrap();
        validate_output_dir(&temp.path().join("dist")).unwrap();
        validate_output_dir(&temp.path().join("missing/dist")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_output_dir_rejects_system_dirs() {
        assert!(validate_output_dir(Path::new("/")).is_err());
        assert!(validate_output_dir(Path::new("/etc")).is_err());
        assert!(validate_output_dir(Path::new("/usr/bin/dist")).is_err());
    }

    #[test]
    fn test_plugins_for_registers_splash_plugin() {
        let plugins = plugins_for(&SplashConfig::default()).unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins.names(), vec!["splashgate"]);
    }

    #[test]
    fn test_display_command_quotes_spaces() {
        let command = vec![
            "npm".to_string(),
            "run".to_string(),
            "build app".to_string(),
        ];
        assert_eq!(display_command(&command), "npm run \"build app\"");
    }
}
