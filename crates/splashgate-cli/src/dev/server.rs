//! Development server.
//!
//! Static files come from the project root; plugins wrap that router with
//! their own middleware, so a plugin route always wins over a file on disk.

use crate::dev::DevConfig;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use axum::Router;
use splashgate::PluginContainer;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Development server.
pub struct DevServer {
    /// Server configuration
    config: DevConfig,
    /// Plugins whose middleware is installed
    plugins: PluginContainer,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevConfig, plugins: PluginContainer) -> Self {
        Self { config, plugins }
    }

    /// Build the axum router.
    ///
    /// Creates a router with:
    /// - Static file serving from the project root as the fallback
    /// - Every plugin's middleware, in registration order
    /// - CORS headers (allow all origins for dev)
    pub fn router(&self) -> Router {
        let files = Router::new().fallback_service(ServeDir::new(&self.config.root));

        self.plugins.apply_server(files).layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    }

    /// Bind and serve until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error if the server cannot bind to the configured address.
    pub async fn start(self) -> Result<()> {
        let addr = self.config.addr;
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_hint(format!("Could not bind to {addr}. Pick another port with --port"))?;

        let local = listener.local_addr()?;
        ui::success(&format!("Development server running at http://{}", local));
        ui::info(&format!("Serving files from {}", self.config.root.display()));
        ui::info("Press Ctrl+C to stop");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        ui::success("Development server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    ui::info("Shutting down development server...");
}
