//! Build command implementation.
//!
//! Stands in for the bundler's build lifecycle: runs the configured bundler
//! command, then fires the build-completion hooks of every plugin (which is
//! where the splash document gets copied next to the output).

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::config::{load_config, ConfigSource, SplashConfig};
use crate::error::{BuildError, Result};
use crate::ui;
use splashgate::SplashPlugin;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::process::Command;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Load configuration (CLI > Env > File > Defaults) and validate it
/// 2. Refuse unsafe output directories
/// 3. Run `build.command`, or create the output directory when there is none
/// 4. Fire the build-completion hooks
/// 5. Display build summary
///
/// # Errors
///
/// Returns errors for invalid configuration, an unsafe output directory or a
/// bundler command that cannot start or exits unsuccessfully. A failed splash
/// copy is logged by the plugin and does not fail the build.
pub async fn execute(args: BuildArgs, source: &ConfigSource) -> Result<()> {
    let start_time = Instant::now();

    ui::info("Loading configuration...");
    let mut config = load_config(source)?;
    apply_args(&mut config, &args);
    config.validate()?;

    let out_dir = config.out_dir_path();
    utils::validate_output_dir(&out_dir)?;

    let plugins = utils::plugins_for(&config)?;

    if config.build.command.is_empty() {
        ui::info("No build.command configured, skipping bundler");
        utils::ensure_output_dir(&out_dir)?;
    } else {
        run_bundler(&config, &out_dir).await?;
        if !out_dir.is_dir() {
            ui::warning(&format!(
                "Bundler did not create the output directory: {}",
                out_dir.display()
            ));
        }
    }

    let destination = splash_destination(&config, &out_dir);
    let failed = plugins.close_bundle();

    let copied = copied_size(&failed, &destination);
    if copied.is_none() {
        ui::error("Splash document was not copied, see the log above");
    }
    ui::print_build_summary(
        &out_dir,
        copied.map(|size| (destination.as_path(), size)),
        start_time.elapsed(),
    );

    ui::success(&format!(
        "Build completed in {}",
        ui::format_duration(start_time.elapsed())
    ));

    Ok(())
}

/// Apply `build` flags on top of the loaded configuration.
fn apply_args(config: &mut SplashConfig, args: &BuildArgs) {
    if let Some(out_dir) = &args.out_dir {
        config.out_dir = out_dir.clone();
    }
    if args.no_minify {
        config.build.minify = false;
    }
    if args.sourcemap {
        config.build.sourcemap = true;
    }
}

/// Run the configured bundler in the project root.
///
/// The bundler reads its settings from `BUNDLE_*` environment variables and
/// inherits stdout and stderr.
async fn run_bundler(config: &SplashConfig, out_dir: &Path) -> Result<()> {
    let Some((program, args)) = config.build.command.split_first() else {
        return Ok(());
    };

    let command_line = utils::display_command(&config.build.command);
    ui::info(&format!("Running bundler: {}", command_line));
    tracing::debug!(
        "Bundler environment: out_dir={} target={} minify={} sourcemap={}",
        out_dir.display(),
        config.build.target,
        config.build.minify,
        config.build.sourcemap
    );

    let status = Command::new(program)
        .args(args)
        .current_dir(&config.root)
        .env("BUNDLE_OUT_DIR", out_dir)
        .env("BUNDLE_TARGET", config.build.target.as_str())
        .env("BUNDLE_MINIFY", config.build.minify.to_string())
        .env("BUNDLE_SOURCEMAP", config.build.sourcemap.to_string())
        .status()
        .await
        .map_err(|e| BuildError::CommandSpawn {
            program: program.clone(),
            error: e.to_string(),
        })?;

    if !status.success() {
        return Err(BuildError::CommandFailed {
            command: command_line,
            status: status.to_string(),
        }
        .into());
    }

    Ok(())
}

fn splash_destination(config: &SplashConfig, out_dir: &Path) -> PathBuf {
    match config.splash_path().file_name() {
        Some(name) => out_dir.join(name),
        None => out_dir.to_path_buf(),
    }
}

/// Size of the copied splash document, or `None` when its hook failed.
fn copied_size(failed: &[Cow<'static, str>], destination: &Path) -> Option<u64> {
    if failed.iter().any(|name| name == SplashPlugin::NAME) {
        return None;
    }
    fs::metadata(destination)
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_apply_args() {
        let mut config = SplashConfig::default();
        let args = BuildArgs {
            out_dir: Some(PathBuf::from("out")),
            no_minify: true,
            sourcemap: true,
        };

        apply_args(&mut config, &args);
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert!(!config.build.minify);
        assert!(config.build.sourcemap);
    }

    #[test]
    fn test_apply_args_keeps_config_without_flags() {
        let mut config = SplashConfig::default();
        apply_args(&mut config, &BuildArgs::default());
        assert_eq!(config, SplashConfig::default());
    }

    #[test]
    fn test_copied_size_follows_hook_outcome() {
        let temp = TempDir::new().unwrap();
        let destination = temp.path().join("splashscreen.html");
        fs::write(&destination, "<html></html>").unwrap();

        assert_eq!(copied_size(&[], &destination), Some(13));
        // A stale copy from an earlier build is not reported as copied.
        assert_eq!(
            copied_size(&[SplashPlugin::NAME.into()], &destination),
            None
        );
        assert_eq!(copied_size(&["other".into()], &destination), Some(13));
    }

    #[test]
    fn test_close_bundle_failure_is_not_reported_as_copied() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("dist");
        fs::create_dir(&out_dir).unwrap();
        fs::write(temp.path().join("splashscreen.html"), "first").unwrap();

        let config = SplashConfig {
            root: temp.path().to_path_buf(),
            ..SplashConfig::default()
        };
        let plugins = utils::plugins_for(&config).unwrap();
        let destination = splash_destination(&config, &out_dir);

        let failed = plugins.close_bundle();
        assert_eq!(copied_size(&failed, &destination), Some(5));

        // Same second, previous copy still on disk, source now gone.
        fs::remove_file(temp.path().join("splashscreen.html")).unwrap();
        let failed = plugins.close_bundle();
        assert_eq!(copied_size(&failed, &destination), None);
        assert!(destination.is_file());
    }

    #[test]
    fn test_splash_destination_uses_base_name() {
        let config = SplashConfig {
            root: PathBuf::from("/project"),
            splash: PathBuf::from("public/loading.html"),
            ..SplashConfig::default()
        };
        assert_eq!(
            splash_destination(&config, Path::new("/project/dist")),
            PathBuf::from("/project/dist/loading.html")
        );
    }

    #[tokio::test]
    async fn test_failing_command_fails_build() {
        let temp = TempDir::new().unwrap();
        let config = SplashConfig {
            root: temp.path().to_path_buf(),
            build: splashgate::BuildConfig {
                command: vec!["splashgate-no-such-bundler".to_string()],
                ..Default::default()
            },
            ..SplashConfig::default()
        };

        let err = run_bundler(&config, &temp.path().join("dist"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("splashgate-no-such-bundler"));
    }
}
