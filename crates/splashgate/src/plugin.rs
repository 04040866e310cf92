//! Host lifecycle seam and the splash plugin.
//!
//! A host registers plugins in a [`PluginContainer`]. While serving it folds
//! every plugin's [`Plugin::configure_server`] over its router; after a
//! production build has written its output it calls
//! [`PluginContainer::close_bundle`] exactly once.

use crate::config::SplashConfig;
use crate::copier::PostBuildCopier;
use crate::document::SplashDocument;
use crate::error::Result;
use crate::middleware::{serve_splash, SplashRoute};
use axum::{middleware::from_fn_with_state, Router};
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

/// A guest registered into the host's serve and build lifecycles.
pub trait Plugin: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> Cow<'static, str>;

    /// Install request middleware on the dev server.
    ///
    /// Called once, after the host has added its own routes and fallback, so
    /// layers added here run before the host's handling.
    fn configure_server(&self, router: Router) -> Router {
        router
    }

    /// Build-completion hook. Runs after all output is written and before
    /// the host reports success. Must not fail the build.
    ///
    /// Returns `false` when the hook could not do its work. The host reports
    /// that outcome but still finishes the build.
    fn close_bundle(&self) -> bool {
        true
    }
}

/// Serves the splash document in development and copies it after builds.
#[derive(Debug, Clone)]
pub struct SplashPlugin {
    route: Arc<SplashRoute>,
    copier: PostBuildCopier,
}

impl SplashPlugin {
    /// Name reported through [`Plugin::name`].
    pub const NAME: &'static str = "splashgate";

    /// Create the plugin from project configuration.
    pub fn new(config: &SplashConfig) -> Result<Self> {
        Self::from_paths(config.splash_path(), &config.route, config.out_dir_path())
    }

    /// Create the plugin from explicit paths.
    ///
    /// # Errors
    ///
    /// Fails if `source` has no file name.
    pub fn from_paths(
        source: impl Into<PathBuf>,
        route: &str,
        out_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let document = SplashDocument::new(source)?;
        Ok(Self {
            route: Arc::new(SplashRoute::new(route, document.clone())),
            copier: PostBuildCopier::new(document, out_dir),
        })
    }

    /// Reserved dev route.
    pub fn route(&self) -> &str {
        &self.route.route
    }

    /// The post-build copier.
    pub fn copier(&self) -> &PostBuildCopier {
        &self.copier
    }
}

impl Plugin for SplashPlugin {
    fn name(&self) -> Cow<'static, str> {
        Self::NAME.into()
    }

    fn configure_server(&self, router: Router) -> Router {
        router.layer(from_fn_with_state(Arc::clone(&self.route), serve_splash))
    }

    fn close_bundle(&self) -> bool {
        self.copier.run()
    }
}

/// Ordered set of plugins driven by the host.
#[derive(Default, Clone)]
pub struct PluginContainer {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Hooks run in registration order.
    pub fn register(&mut self, plugin: impl Plugin + 'static) -> &mut Self {
        tracing::debug!("Registered plugin '{}'", plugin.name());
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Registered plugin names, in order.
    pub fn names(&self) -> Vec<Cow<'static, str>> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Let every plugin wrap the dev server router.
    ///
    /// Layers wrap from the inside out, so the first registered plugin sees a
    /// request last. Register the plugin that must run first last.
    pub fn apply_server(&self, router: Router) -> Router {
        self.plugins
            .iter()
            .fold(router, |router, plugin| plugin.configure_server(router))
    }

    /// Fire the build-completion event on every plugin once.
    ///
    /// Every hook runs even when an earlier one fails. Returns the names of
    /// the plugins whose hook reported a failure, in registration order.
    pub fn close_bundle(&self) -> Vec<Cow<'static, str>> {
        let mut failed = Vec::new();
        for plugin in &self.plugins {
            tracing::debug!("Running close_bundle for '{}'", plugin.name());
            if !plugin.close_bundle() {
                failed.push(plugin.name());
            }
        }
        failed
    }
}

impl std::fmt::Debug for PluginContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginContainer")
            .field("plugins", &self.names())
            .finish()
    }
}
