use axum::{routing::get, Router};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    controller::{
        auth::{callback, get_user, login, logout},
        chat::get_chat_token,
        health::{books, health},
        job::{introspect, invoke},
    },
    error::AppError,
    gateway, middleware,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/books", get(books))
        .route("/api/inngest", get(introspect).post(invoke))
        .route("/api/chat/token", get(get_chat_token))
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
}

/// Assembles the application: API routes, the production static gateway, then the
/// middleware pipeline around everything.
pub fn build(
    state: AppState,
    session: SessionManagerLayer<SqliteStore>,
) -> Result<Router, AppError> {
    let config = state.config.clone();

    let router = gateway::mount(routes(), &config).with_state(state);

    middleware::apply(router, &config, session)
}
