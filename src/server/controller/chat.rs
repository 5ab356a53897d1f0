use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::server::{
    error::AppError,
    middleware::auth::{AuthContext, AuthGuard},
    service::chat::ChatService,
    state::AppState,
};

/// GET /api/chat/token - Chat service credentials for the signed-in user
///
/// # Returns
/// - `200 OK`: ChatTokenDto with a one hour user token
/// - `401 Unauthorized`: No user signed in
/// - `404 Not Found`: Signed-in user no longer exists
pub async fn get_chat_token(
    State(state): State<AppState>,
    auth: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let chat_service = ChatService::new(&state.config.chat_api_key, &state.config.chat_api_secret);
    let token = chat_service.issue_token(user)?;

    Ok((StatusCode::OK, Json(token)))
}
