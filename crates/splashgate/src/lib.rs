//! Splash document delivery for bundled desktop applications.
//!
//! The splash screen must be reachable while the dev server runs and must sit
//! next to the production output after a build, without ever going through
//! the bundler's module pipeline (which would rewrite its paths). This crate
//! provides both halves:
//!
//! - [`middleware`] - dev-server middleware answering one reserved route with
//!   the document's current contents
//! - [`copier`] - one-shot copy into the output directory after the build,
//!   logging instead of failing
//! - [`plugin`] - the [`Plugin`] seam a host drives, and [`SplashPlugin`]
//!   wiring both halves to a [`SplashConfig`]
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::Router;
//! use splashgate::{PluginContainer, SplashConfig, SplashPlugin};
//!
//! # fn main() -> splashgate::Result<()> {
//! let config = SplashConfig::default();
//! let mut plugins = PluginContainer::new();
//! plugins.register(SplashPlugin::new(&config)?);
//!
//! // serve
//! let _app = plugins.apply_server(Router::new());
//!
//! // build finished
//! for name in plugins.close_bundle() {
//!     eprintln!("plugin '{name}' could not finish");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod copier;
pub mod document;
pub mod error;
pub mod middleware;
pub mod plugin;

pub use config::{BuildConfig, BuildTarget, ServerConfig, SplashConfig};
pub use copier::PostBuildCopier;
pub use document::SplashDocument;
pub use error::{Error, Result};
pub use middleware::{serve_splash, SplashRoute};
pub use plugin::{Plugin, PluginContainer, SplashPlugin};
