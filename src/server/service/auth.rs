use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Profile returned by the auth provider's OpenID Connect userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderUserInfo {
    /// Provider subject id.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

impl ProviderUserInfo {
    pub fn into_upsert_param(self) -> UpsertUserParam {
        UpsertUserParam {
            auth_id: self.sub,
            email: self.email,
            name: self.name,
            profile_image: self.picture,
        }
    }
}

/// Service for the OAuth2 sign-in flow against the configured auth provider.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Generates the provider authorization URL with a fresh CSRF state token.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the state token to store for the callback
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Completes sign-in for an authorization code returned by the provider.
    ///
    /// Exchanges the code for an access token, fetches the provider profile and upserts the
    /// matching user.
    ///
    /// # Returns
    /// - `Ok(User)` - Created or refreshed user
    /// - `Err(AuthError::TokenExchange)` - Provider rejected the authorization code
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let profile = self.fetch_userinfo(&token).await?;

        let user = UserRepository::new(self.db)
            .upsert(profile.into_upsert_param())
            .await?;

        Ok(user)
    }

    async fn fetch_userinfo(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<ProviderUserInfo, AppError> {
        let profile = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderUserInfo>()
            .await?;

        Ok(profile)
    }
}
