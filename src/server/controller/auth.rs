use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthContext, AuthGuard},
        session::{AuthSession, CsrfSession},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Query parameters of the OAuth callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token, must match the value stored in the session.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// GET /api/auth/login - Start sign-in
///
/// Stores a CSRF token in the session and redirects to the provider's consent screen.
///
/// # Returns
/// - `307 Temporary Redirect`: Provider authorize URL
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.config.auth_userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /api/auth/callback - Finish sign-in
///
/// # Returns
/// - `307 Temporary Redirect`: Back to the client once the user is signed in
/// - `400 Bad Request`: Missing or mismatched CSRF state
/// - `500 Internal Server Error`: Provider or database failure
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.config.auth_userinfo_url,
    );

    validate_csrf(&session, &params.0.state).await?;

    let user = auth_service.callback(params.0.code).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;
    tracing::info!("User {} signed in", user.id);

    Ok(Redirect::temporary(&state.config.client_origin))
}

/// GET /api/auth/logout - Sign out
///
/// # Returns
/// - `307 Temporary Redirect`: Back to the client with the session cleared
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(Redirect::temporary(&state.config.client_origin))
}

/// GET /api/auth/user - Current user
///
/// # Returns
/// - `200 OK`: UserDto of the signed-in user
/// - `401 Unauthorized`: No user signed in
/// - `404 Not Found`: Signed-in user no longer exists
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
