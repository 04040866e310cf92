//! Declarative project configuration consumed by the plugin and its host.
//!
//! Loaded from `splashgate.config.json` (camelCase keys). Only the splash
//! paths and route drive runtime behavior; the rest is static settings
//! forwarded to the bundler.

use crate::error::{Error, Result};
use crate::middleware::DEFAULT_ROUTE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Config file looked up in the project root.
pub const CONFIG_FILE: &str = "splashgate.config.json";

/// Aliases every project must declare.
pub const REQUIRED_ALIASES: &[&str] = &["@"];

/// Project configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SplashConfig {
    /// Project root; relative paths below resolve against it
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Splash document source, relative to `root`
    #[serde(default = "default_splash")]
    pub splash: PathBuf,

    /// Reserved dev-server route for the splash document
    #[serde(default = "default_route")]
    pub route: String,

    /// Production output directory, relative to `root`
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Development server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Settings forwarded to the bundler
    #[serde(default)]
    pub build: BuildConfig,

    /// Import aliases (alias -> directory relative to `root`)
    #[serde(default = "default_aliases")]
    pub aliases: BTreeMap<String, PathBuf>,
}

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Fail when the port is taken instead of trying the next ones
    #[serde(default = "default_strict_port")]
    pub strict_port: bool,
}

/// Bundler settings. Opaque to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
    /// Output language target
    #[serde(default = "default_target")]
    pub target: BuildTarget,

    /// Minify output
    #[serde(default = "default_minify")]
    pub minify: bool,

    /// Emit source maps
    #[serde(default)]
    pub sourcemap: bool,

    /// Bundler invocation: program followed by its arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
}

/// Language/runtime target for the bundled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    Es2020,
    Es2021,
    Es2022,
    Esnext,
    /// WebView2 on Windows
    Chrome105,
    /// WebKit on macOS and Linux
    Safari13,
}

impl BuildTarget {
    /// Name as written in config files and passed to the bundler.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildTarget::Es2020 => "es2020",
            BuildTarget::Es2021 => "es2021",
            BuildTarget::Es2022 => "es2022",
            BuildTarget::Esnext => "esnext",
            BuildTarget::Chrome105 => "chrome105",
            BuildTarget::Safari13 => "safari13",
        }
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_splash() -> PathBuf {
    PathBuf::from("splashscreen.html")
}

pub fn default_route() -> String {
    DEFAULT_ROUTE.to_string()
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    1420
}

pub fn default_strict_port() -> bool {
    true
}

pub fn default_target() -> BuildTarget {
    BuildTarget::Es2021
}

pub fn default_minify() -> bool {
    true
}

pub fn default_aliases() -> BTreeMap<String, PathBuf> {
    BTreeMap::from([("@".to_string(), PathBuf::from("src"))])
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            strict_port: default_strict_port(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            minify: default_minify(),
            sourcemap: false,
            command: Vec::new(),
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            splash: default_splash(),
            route: default_route(),
            out_dir: default_out_dir(),
            server: ServerConfig::default(),
            build: BuildConfig::default(),
            aliases: default_aliases(),
        }
    }
}

impl SplashConfig {
    /// Absolute-or-root-relative location of the splash document.
    pub fn splash_path(&self) -> PathBuf {
        resolve(&self.root, &self.splash)
    }

    /// Resolved production output directory.
    pub fn out_dir_path(&self) -> PathBuf {
        resolve(&self.root, &self.out_dir)
    }

    /// Resolved alias targets, in alias order.
    pub fn alias_paths(&self) -> impl Iterator<Item = (&str, PathBuf)> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), resolve(&self.root, target)))
    }

    /// Check the configuration for logical consistency.
    ///
    /// Does not touch the filesystem: a missing splash document is a runtime
    /// condition, not a config error.
    pub fn validate(&self) -> Result<()> {
        if !self.route.starts_with('/') {
            return Err(invalid("route", &self.route, "Routes must start with '/'"));
        }

        if self.route.chars().any(char::is_whitespace) || self.route.contains('?') {
            return Err(invalid(
                "route",
                &self.route,
                "Routes are plain paths without whitespace or query strings",
            ));
        }

        if self.splash.file_name().is_none() {
            return Err(invalid(
                "splash",
                &self.splash.display().to_string(),
                "Point 'splash' at a file, e.g. \"splashscreen.html\"",
            ));
        }

        if self.out_dir.as_os_str().is_empty() || self.out_dir == Path::new(".") {
            return Err(invalid(
                "outDir",
                &self.out_dir.display().to_string(),
                "The output directory must differ from the project root",
            ));
        }

        if self.aliases.keys().any(String::is_empty) {
            return Err(invalid("aliases", "\"\"", "Alias names cannot be empty"));
        }

        for required in REQUIRED_ALIASES {
            if !self.aliases.contains_key(*required) {
                return Err(invalid(
                    "aliases",
                    &format!("{:?}", self.aliases.keys().collect::<Vec<_>>()),
                    &format!("Declare the '{required}' alias, e.g. \"{required}\": \"src\""),
                ));
            }
        }

        if let Some(program) = self.build.command.first() {
            if program.trim().is_empty() {
                return Err(invalid(
                    "build.command",
                    program,
                    "The first element must name the bundler program",
                ));
            }
        }

        Ok(())
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn invalid(field: &str, value: &str, hint: &str) -> Error {
    Error::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
        hint: hint.to_string(),
    }
}
