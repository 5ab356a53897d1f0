//! Server-side API backend.
//!
//! The backend uses axum as the web framework, SeaORM on SQLite for persistence and
//! tower-sessions for server-side sessions.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - OAuth sign-in and chat token issuing
//! - **Job Bridge** (`job/`) - Job functions invoked by the background job orchestrator
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Ordered request pipeline and authentication context
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, config)
//! - **Startup** (`startup`) - Database, session store and client initialization
//! - **Router** (`router`) - Route table and pipeline assembly
//! - **Gateway** (`gateway`) - Production static asset serving
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod gateway;
pub mod job;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
mod test;

use std::sync::Arc;

use dioxus_logger::tracing;
use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, state::AppState};

/// Loads configuration through `lookup` and runs the server until a shutdown signal.
///
/// Configuration and database errors are returned before the listener is bound.
pub async fn launch<F>(lookup: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::from_lookup(lookup)?;

    serve(config).await
}

/// Connects to the database, binds the listener and serves until shutdown.
///
/// The database connection is closed after in-flight requests have drained.
pub async fn serve(config: Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let config = Arc::new(config);
    let addr = config.listen_addr();
    let state = AppState::new(db.clone(), http_client, oauth_client, config.clone());
    let app = router::build(state, session)?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        "Listening on {} ({:?})",
        listener.local_addr()?,
        config.environment
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Database connection closed");

    Ok(())
}
