use std::time::Duration;

use dioxus_logger::tracing;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

const INITIAL_CONNECT_BACKOFF: Duration = Duration::from_millis(500);
const MAX_CONNECT_BACKOFF: Duration = Duration::from_secs(8);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Connection attempts are retried with exponential backoff, starting at 500 ms and capped at
/// 8 s, up to `database_connect_attempts` times. The error from the last attempt is returned.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Every attempt failed, or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let mut attempt = 1;

    let db = loop {
        match Database::connect(opt.clone()).await {
            Ok(db) => break db,
            Err(e) if attempt < config.database_connect_attempts => {
                let backoff = connect_backoff(attempt);
                tracing::warn!(
                    "Database connection attempt {}/{} failed: {}; retrying in {:?}",
                    attempt,
                    config.database_connect_attempts,
                    e,
                    backoff
                );

                tokio::time::sleep(backoff).await;
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    };

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Delay before retrying after failed connection attempt number `attempt` (1-based).
///
/// Starts at 500 ms and doubles per attempt, capped at 8 s.
pub fn connect_backoff(attempt: u32) -> Duration {
    let doublings = attempt.saturating_sub(1).min(16);

    INITIAL_CONNECT_BACKOFF
        .saturating_mul(1 << doublings)
        .min(MAX_CONNECT_BACKOFF)
}

/// Creates the session store in the application database and configures session cookies.
///
/// Cookies are marked secure in production only so the development client can run over
/// plain http.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.environment.is_production())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used to talk to the auth provider.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        // Following redirects opens the client up to SSRF vulnerabilities.
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client from the configured provider endpoints.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |var: &str, e: url::ParseError| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    };

    let auth_url = AuthUrl::new(config.auth_authorize_url.clone())
        .map_err(|e| invalid("AUTH_AUTHORIZE_URL", e))?;
    let token_url =
        TokenUrl::new(config.auth_token_url.clone()).map_err(|e| invalid("AUTH_TOKEN_URL", e))?;
    let redirect_url = RedirectUrl::new(config.auth_redirect_url.clone())
        .map_err(|e| invalid("AUTH_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.auth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.auth_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Resolves once the process receives Ctrl-C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
