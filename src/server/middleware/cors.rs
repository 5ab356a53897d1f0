use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::server::{config::Config, error::config::ConfigError};

/// Builds the CORS layer allowing credentialed requests from the client origin only.
///
/// Credentialed CORS forbids wildcards, so methods and headers are listed explicitly.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(&config.client_origin).map_err(|e| {
        ConfigError::InvalidEnvValue {
            var: "CLIENT_URL".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]))
}
