//! Check command implementation.
//!
//! Validates configuration without building or serving.

use crate::cli::CheckArgs;
use crate::config::{load_config, ConfigSource, SplashConfig};
use crate::error::{CliError, ConfigError, Result};
use crate::ui;
use std::path::PathBuf;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and validate the configuration
/// 2. Check the splash document exists
/// 3. Check every alias target exists
///
/// # Errors
///
/// Returns errors for invalid configuration. With `--strict`, a missing splash
/// document or alias directory is an error too; otherwise a warning.
pub async fn execute(args: CheckArgs, source: &ConfigSource) -> Result<()> {
    ui::info("Checking configuration...");

    let config = load_config(source)?;
    ui::success("Configuration is valid!");

    let report = CheckReport::collect(&config);

    ui::info("Checking splash document...");
    if report.splash_found {
        ui::success(&format!("  {} exists", config.splash_path().display()));
    } else {
        ui::warning(&format!(
            "  Splash document not found: {}",
            config.splash_path().display()
        ));
    }

    ui::info("Checking aliases...");
    for (alias, target) in config.alias_paths() {
        if report.missing_aliases.iter().any(|(name, _)| name == alias) {
            ui::warning(&format!("  {} -> {} does not exist", alias, target.display()));
        } else {
            ui::success(&format!("  {} -> {}", alias, target.display()));
        }
    }

    if args.strict {
        report.into_result(&config)?;
    }

    ui::success("All checks passed!");
    Ok(())
}

/// Filesystem findings for a valid configuration.
#[derive(Debug, Default)]
struct CheckReport {
    splash_found: bool,
    missing_aliases: Vec<(String, PathBuf)>,
}

impl CheckReport {
    fn collect(config: &SplashConfig) -> Self {
        let missing_aliases = config
            .alias_paths()
            .filter(|(_, target)| !target.is_dir())
            .map(|(alias, target)| (alias.to_string(), target))
            .collect();

        Self {
            splash_found: config.splash_path().is_file(),
            missing_aliases,
        }
    }

    /// Turn findings into an error, splash document first.
    fn into_result(self, config: &SplashConfig) -> Result<()> {
        if !self.splash_found {
            return Err(CliError::FileNotFound(config.splash_path()));
        }

        if let Some((alias, target)) = self.missing_aliases.into_iter().next() {
            return Err(ConfigError::MissingField {
                field: format!("aliases.{alias}"),
                hint: format!("Create the directory {}", target.display()),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> SplashConfig {
        SplashConfig {
            root: temp.path().to_path_buf(),
            ..SplashConfig::default()
        }
    }

    #[test]
    fn test_report_for_complete_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("splashscreen.html"), "<html></html>").unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();

        let config = config_in(&temp);
        let report = CheckReport::collect(&config);

        assert!(report.splash_found);
        assert!(report.missing_aliases.is_empty());
        report.into_result(&config).unwrap();
    }

    #[test]
    fn test_missing_splash_reported_first() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let report = CheckReport::collect(&config);

        assert!(!report.splash_found);
        assert_eq!(report.missing_aliases.len(), 1);
        assert!(matches!(
            report.into_result(&config),
            Err(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_missing_alias_target() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("splashscreen.html"), "").unwrap();

        let config = config_in(&temp);
        let err = CheckReport::collect(&config)
            .into_result(&config)
            .unwrap_err();
        assert!(err.to_string().contains("aliases.@"));
    }
}
