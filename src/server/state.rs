//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through axum's state
//! extraction. Every field is cheap to clone: the database handle is a pool, the HTTP clients
//! are reference counted and the configuration sits behind an `Arc`.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::config::Config;

/// OAuth2 client with the authorize and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool opened before the listener binds.
    pub db: DatabaseConnection,

    /// HTTP client for auth provider requests.
    ///
    /// Redirects are disabled to prevent SSRF through provider responses.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Immutable configuration loaded at process start.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: Arc<Config>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            config,
        }
    }
}
