use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::{
    model::chat::ChatTokenDto,
    server::{error::AppError, model::user::User},
};

const TOKEN_LIFETIME_HOURS: i64 = 1;

/// Claims of the user token presented to the chat service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatClaims {
    /// Auth provider subject id of the user.
    pub user_id: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues chat service credentials for signed-in users.
pub struct ChatService<'a> {
    api_key: &'a str,
    api_secret: &'a str,
}

impl<'a> ChatService<'a> {
    pub fn new(api_key: &'a str, api_secret: &'a str) -> Self {
        Self {
            api_key,
            api_secret,
        }
    }

    /// Signs an HS256 user token valid for one hour.
    ///
    /// The chat service identifies users by their auth provider id so the same user maps to
    /// the same chat identity across databases.
    pub fn issue_token(&self, user: User) -> Result<ChatTokenDto, AppError> {
        let now = Utc::now();
        let claims = ChatClaims {
            user_id: user.auth_id.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.api_secret.as_bytes()),
        )?;

        Ok(ChatTokenDto {
            api_key: self.api_key.to_string(),
            token,
            user_id: user.auth_id,
            user_name: user.name,
            user_image: user.profile_image,
        })
    }
}
