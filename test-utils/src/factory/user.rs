//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .auth_id("user_2abc")
///     .name("Ada")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    auth_id: String,
    email: String,
    name: String,
    profile_image: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - auth_id: `"user_{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - profile_image: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            auth_id: format!("user_{}", id),
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            profile_image: None,
        }
    }

    /// Sets the auth provider subject id for the user.
    pub fn auth_id(mut self, auth_id: impl Into<String>) -> Self {
        self.auth_id = auth_id.into();
        self
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the profile image URL for the user.
    pub fn profile_image(mut self, profile_image: impl Into<String>) -> Self {
        self.profile_image = Some(profile_image.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            auth_id: ActiveValue::Set(self.auth_id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            profile_image: ActiveValue::Set(self.profile_image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
