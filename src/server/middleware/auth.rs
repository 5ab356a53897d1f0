//! Per-request authentication context.
//!
//! [`decorate_auth`] runs for every request after the session stage and records who, if
//! anyone, is signed in. It never rejects; handlers that need a user call
//! [`AuthContext::require`] or [`AuthGuard::require`].

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Identity attached to a request by the auth decoration stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// Internal id of the signed-in user, `None` for anonymous requests.
    pub user_id: Option<i32>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn signed_in(user_id: i32) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Returns the signed-in user id or `AuthError::UserNotInSession`.
    pub fn require(&self) -> Result<i32, AuthError> {
        self.user_id.ok_or(AuthError::UserNotInSession)
    }
}

/// Extracts the context inserted by [`decorate_auth`], anonymous if the stage didn't run.
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<AuthContext>()
            .copied()
            .unwrap_or_default())
    }
}

/// Middleware inserting an [`AuthContext`] into the request extensions.
///
/// A session that can't be read is logged and treated as anonymous.
pub async fn decorate_auth(session: Session, mut request: Request, next: Next) -> Response {
    let user_id = match AuthSession::new(&session).get_user_id().await {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!("Failed to read user from session: {}", e);
            None
        }
    };

    request.extensions_mut().insert(AuthContext { user_id });

    next.run(request).await
}

/// Resolves the request's signed-in user from the database.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthContext,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthContext) -> Self {
        Self { db, auth }
    }

    /// Requires a signed-in user that still exists.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user
    /// - `Err(AuthError::UserNotInSession)` - Anonymous request
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self) -> Result<User, AppError> {
        let user_id = self.auth.require()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
