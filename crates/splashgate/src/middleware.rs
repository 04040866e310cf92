//! Development middleware serving the splash document on its reserved route.
//!
//! The middleware sits in front of the host's own asset handling. A request
//! for the reserved route is answered with the document as it is on disk
//! right now; every other request is handed to the next service untouched.

use crate::document::{SplashDocument, HTML_CONTENT_TYPE};
use crate::error::Result;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Default reserved route for the splash document.
pub const DEFAULT_ROUTE: &str = "/splashscreen.html";

/// State shared by every invocation of [`serve_splash`].
#[derive(Debug)]
pub struct SplashRoute {
    /// Exact request path that is intercepted
    pub route: String,
    /// Document served on that path
    pub document: SplashDocument,
}

impl SplashRoute {
    /// Pair a route with the document it serves.
    pub fn new(route: impl Into<String>, document: SplashDocument) -> Self {
        Self {
            route: route.into(),
            document,
        }
    }

    /// Whether a request path targets the splash document.
    ///
    /// The query string is not part of `path`, so `/splashscreen.html?v=2`
    /// still matches.
    pub fn matches(&self, path: &str) -> bool {
        path == self.route
    }
}

/// Shared handle passed to `from_fn_with_state`.
pub type SharedRoute = Arc<SplashRoute>;

/// Intercept the reserved route, pass everything else through.
///
/// Use with [`axum::middleware::from_fn_with_state`]. The HTTP method is not
/// inspected.
///
/// # Errors
///
/// A read failure is returned as-is; its `IntoResponse` impl turns it into a
/// 500 for this request only.
pub async fn serve_splash(
    State(splash): State<SharedRoute>,
    request: Request,
    next: Next,
) -> Result<Response> {
    if !splash.matches(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let content = splash.document.read().await?;
    tracing::debug!(
        "Serving {} ({} bytes) on {}",
        splash.document.source().display(),
        content.len(),
        splash.route
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HTML_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        content,
    )
        .into_response())
}
