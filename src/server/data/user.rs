//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::{UpsertUserParam, User};

/// Repository providing database operations for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user or refreshes the profile of the user with the same `auth_id`.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            auth_id: ActiveValue::Set(param.auth_id),
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            profile_image: ActiveValue::Set(param.profile_image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::AuthId)
                .update_columns([
                    entity::user::Column::Email,
                    entity::user::Column::Name,
                    entity::user::Column::ProfileImage,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by the auth provider's subject id.
    pub async fn find_by_auth_id(&self, auth_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::AuthId.eq(auth_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Deletes the user with the given auth provider subject id.
    ///
    /// # Returns
    /// - `Ok(true)` - A user was deleted
    /// - `Ok(false)` - No user matched
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_auth_id(&self, auth_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::AuthId.eq(auth_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
