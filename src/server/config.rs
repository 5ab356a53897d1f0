//! Environment-based application configuration.
//!
//! The configuration is read once at process start and then shared read-only through
//! [`AppState`](crate::server::state::AppState). Loading fails on the first missing or
//! malformed required variable so the server never starts half-configured.

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use url::Url;

use crate::server::error::config::ConfigError;

const DEFAULT_ASSET_DIR: &str = "dist";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DATABASE_CONNECT_ATTEMPTS: u32 = 5;
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Deployment environment, selected by `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// `"production"` selects production; any other value is treated as development.
    pub fn from_name(name: &str) -> Self {
        if name == "production" {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Origin allowed to make credentialed cross-origin requests, without trailing slash.
    pub client_origin: String,
    pub environment: Environment,
    pub database_url: String,
    pub database_connect_attempts: u32,

    /// Directory holding the pre-built client bundle served in production.
    pub asset_dir: PathBuf,
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,

    pub auth_client_id: String,
    pub auth_client_secret: String,
    pub auth_authorize_url: String,
    pub auth_token_url: String,
    pub auth_userinfo_url: String,
    pub auth_redirect_url: String,

    pub chat_api_key: String,
    pub chat_api_secret: String,

    /// Shared secret the job orchestrator presents when invoking job functions.
    pub job_signing_key: String,
}

impl Config {
    /// Loads configuration using `lookup` to resolve variable names.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - First required variable that is unset or blank
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let required_url = |name: &str| -> Result<String, ConfigError> {
            let value = required(name)?;
            parse_url(name, &value)?;
            Ok(value)
        };

        let port = parse_value::<u16>("PORT", &required("PORT")?)?;
        let client_origin = parse_origin("CLIENT_URL", &required("CLIENT_URL")?)?;
        let environment = Environment::from_name(&required("NODE_ENV")?);
        let database_url = required("DATABASE_URL")?;

        let auth_client_id = required("AUTH_CLIENT_ID")?;
        let auth_client_secret = required("AUTH_CLIENT_SECRET")?;
        let auth_authorize_url = required_url("AUTH_AUTHORIZE_URL")?;
        let auth_token_url = required_url("AUTH_TOKEN_URL")?;
        let auth_userinfo_url = required_url("AUTH_USERINFO_URL")?;
        let auth_redirect_url = required_url("AUTH_REDIRECT_URL")?;

        let chat_api_key = required("CHAT_API_KEY")?;
        let chat_api_secret = required("CHAT_API_SECRET")?;
        let job_signing_key = required("JOB_SIGNING_KEY")?;

        let asset_dir = lookup("ASSET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));
        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_value("REQUEST_TIMEOUT_SECS", &value)?),
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };
        let body_limit_bytes = match lookup("BODY_LIMIT_BYTES") {
            Some(value) => parse_value("BODY_LIMIT_BYTES", &value)?,
            None => DEFAULT_BODY_LIMIT_BYTES,
        };
        let database_connect_attempts = match lookup("DATABASE_CONNECT_ATTEMPTS") {
            Some(value) => parse_value("DATABASE_CONNECT_ATTEMPTS", &value)?,
            None => DEFAULT_DATABASE_CONNECT_ATTEMPTS,
        };
        if database_connect_attempts == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_CONNECT_ATTEMPTS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            port,
            client_origin,
            environment,
            database_url,
            database_connect_attempts,
            asset_dir,
            request_timeout,
            body_limit_bytes,
            auth_client_id,
            auth_client_secret,
            auth_authorize_url,
            auth_token_url,
            auth_userinfo_url,
            auth_redirect_url,
            chat_api_key,
            chat_api_secret,
            job_signing_key,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Entry document served for any unmatched path by the static gateway.
    pub fn index_file(&self) -> PathBuf {
        self.asset_dir.join("index.html")
    }
}

fn parse_value<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn parse_url(var: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

/// Reduces a URL to the `scheme://host[:port]` form browsers send in `Origin`.
fn parse_origin(var: &str, value: &str) -> Result<String, ConfigError> {
    Ok(parse_url(var, value)?.origin().ascii_serialization())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    pub(crate) fn base_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            ("PORT", "3000".to_string()),
            ("CLIENT_URL", "http://localhost:5173".to_string()),
            ("NODE_ENV", "development".to_string()),
            ("DATABASE_URL", "sqlite::memory:".to_string()),
            ("AUTH_CLIENT_ID", "client-id".to_string()),
            ("AUTH_CLIENT_SECRET", "client-secret".to_string()),
            (
                "AUTH_AUTHORIZE_URL",
                "https://auth.example.com/authorize".to_string(),
            ),
            ("AUTH_TOKEN_URL", "https://auth.example.com/token".to_string()),
            (
                "AUTH_USERINFO_URL",
                "https://auth.example.com/userinfo".to_string(),
            ),
            (
                "AUTH_REDIRECT_URL",
                "http://localhost:3000/api/auth/callback".to_string(),
            ),
            ("CHAT_API_KEY", "chat-key".to_string()),
            ("CHAT_API_SECRET", "chat-secret".to_string()),
            ("JOB_SIGNING_KEY", "signing-key".to_string()),
        ])
    }

    fn load(vars: &HashMap<&'static str, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    /// Expect every required variable to be loaded and optional ones defaulted
    #[test]
    fn loads_complete_configuration() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.client_origin, "http://localhost:5173");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.asset_dir, PathBuf::from("dist"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.database_connect_attempts, 5);
        assert_eq!(config.body_limit_bytes, 1024 * 1024);
        assert_eq!(config.index_file(), PathBuf::from("dist/index.html"));
    }

    /// Expect each missing required variable to be reported by name
    #[test]
    fn reports_each_missing_required_variable() {
        for name in base_vars().keys() {
            let mut vars = base_vars();
            vars.remove(name);

            match load(&vars) {
                Err(ConfigError::MissingEnvVar(missing)) => assert_eq!(missing, *name),
                other => panic!("expected missing {} error, got {:?}", name, other),
            }
        }
    }

    /// Expect a blank required variable to be reported as missing
    #[test]
    fn reports_each_blank_required_variable() {
        for blank in ["", "   "] {
            for name in base_vars().keys() {
                let mut vars = base_vars();
                vars.insert(name, blank.to_string());

                match load(&vars) {
                    Err(ConfigError::MissingEnvVar(missing)) => assert_eq!(missing, *name),
                    other => panic!("expected blank {} to be missing, got {:?}", name, other),
                }
            }
        }
    }

    /// Expect a non-numeric port to be rejected
    #[test]
    fn rejects_invalid_port() {
        let mut vars = base_vars();
        vars.insert("PORT", "eighty".to_string());

        let result = load(&vars);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "PORT"
        ));
    }

    /// Expect the client URL to be reduced to its origin
    #[test]
    fn normalizes_client_url_to_origin() {
        let mut vars = base_vars();
        vars.insert("CLIENT_URL", "https://app.example.com/".to_string());

        let config = load(&vars).unwrap();

        assert_eq!(config.client_origin, "https://app.example.com");
    }

    /// Expect a client URL that is not http(s) to be rejected
    #[test]
    fn rejects_non_http_client_url() {
        let mut vars = base_vars();
        vars.insert("CLIENT_URL", "localhost:5173".to_string());

        assert!(matches!(
            load(&vars),
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "CLIENT_URL"
        ));
    }

    /// Expect only the exact value "production" to select production mode
    #[test]
    fn selects_environment_from_node_env() {
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("Production"), Environment::Development);
        assert_eq!(Environment::from_name(""), Environment::Development);
    }

    /// Expect zero connect attempts to be rejected
    #[test]
    fn rejects_zero_connect_attempts() {
        let mut vars = base_vars();
        vars.insert("DATABASE_CONNECT_ATTEMPTS", "0".to_string());

        assert!(matches!(
            load(&vars),
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "DATABASE_CONNECT_ATTEMPTS"
        ));
    }
}
