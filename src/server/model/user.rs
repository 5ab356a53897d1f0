//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// User signed in through the third-party auth provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Subject id assigned by the auth provider.
    pub auth_id: String,
    pub email: String,
    pub name: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            auth_id: entity.auth_id,
            email: entity.email,
            name: entity.name,
            profile_image: entity.profile_image,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            profile_image: self.profile_image,
        }
    }
}

/// Parameters for creating or refreshing a user from auth provider data.
///
/// Used both on OAuth sign-in and when the provider reports a created user through the
/// job bridge. Existing users matched by `auth_id` have their profile fields overwritten.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub auth_id: String,
    pub email: String,
    pub name: String,
    pub profile_image: Option<String>,
}
