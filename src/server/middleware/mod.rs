//! Request middleware pipeline.
//!
//! The pipeline is an explicit ordered list of [`Stage`]s. Requests pass through the stages
//! top to bottom before reaching route dispatch; responses unwind in reverse.

pub mod auth;
pub mod cors;
pub mod session;

#[cfg(test)]
mod test;

use axum::{extract::DefaultBodyLimit, http::StatusCode, Router};
use dioxus_logger::tracing;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError};

/// A single step of the request pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Opens a tracing span per request and logs the response status and latency.
    ///
    /// Reads: method, URI. Writes: nothing.
    Trace,
    /// Aborts requests that run longer than `REQUEST_TIMEOUT_SECS`.
    ///
    /// Reads: nothing. Writes: replaces the response on timeout.
    Timeout,
    /// Caps the body size JSON and form extractors will buffer.
    ///
    /// Reads: nothing. Writes: body limit extension.
    BodyLimit,
    /// Only `CLIENT_URL`'s origin may make credentialed cross-origin requests.
    ///
    /// Reads: `Origin`, preflight headers. Writes: `Access-Control-*` response headers.
    Cors,
    /// Loads the server-side session named by the `id` cookie and saves it after the handler.
    ///
    /// Reads: `Cookie`. Writes: `Session` extension, `Set-Cookie`.
    Session,
    /// Resolves the signed-in user from the session; never rejects.
    ///
    /// Reads: `Session` extension. Writes: `AuthContext` extension.
    AuthDecoration,
}

/// Pipeline stages in the order a request passes through them.
pub const STAGES: [Stage; 6] = [
    Stage::Trace,
    Stage::Timeout,
    Stage::BodyLimit,
    Stage::Cors,
    Stage::Session,
    Stage::AuthDecoration,
];

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Trace => "trace",
            Stage::Timeout => "timeout",
            Stage::BodyLimit => "body_limit",
            Stage::Cors => "cors",
            Stage::Session => "session",
            Stage::AuthDecoration => "auth_decoration",
        }
    }
}

/// Wraps `router` with every stage in [`STAGES`].
///
/// `Router::layer` makes the most recently added layer the outermost, so stages are added
/// last to first. Routes and the fallback must be registered before calling this.
pub fn apply(
    router: Router,
    config: &Config,
    session: SessionManagerLayer<SqliteStore>,
) -> Result<Router, AppError> {
    let cors = cors::cors_layer(config)?;

    let router = STAGES
        .iter()
        .rev()
        .fold(router, |router, stage| {
            tracing::debug!("Applying middleware stage {}", stage.name());
            match stage {
                Stage::Trace => router.layer(TraceLayer::new_for_http()),
                Stage::Timeout => router.layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout,
                )),
                Stage::BodyLimit => router.layer(DefaultBodyLimit::max(config.body_limit_bytes)),
                Stage::Cors => router.layer(cors.clone()),
                Stage::Session => router.layer(session.clone()),
                Stage::AuthDecoration => {
                    router.layer(axum::middleware::from_fn(auth::decorate_auth))
                }
            }
        });

    Ok(router)
}
