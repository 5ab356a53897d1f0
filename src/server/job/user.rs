use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::server::{
    data::user::UserRepository, error::AppError, model::user::UpsertUserParam,
};

/// User profile carried by `auth/user.created`.
#[derive(Debug, Deserialize)]
pub struct UserEventData {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Payload of `auth/user.deleted`.
#[derive(Debug, Deserialize)]
pub struct DeletedUserEventData {
    pub id: String,
}

pub async fn sync_user(db: &DatabaseConnection, data: UserEventData) -> Result<Value, AppError> {
    let user = UserRepository::new(db)
        .upsert(UpsertUserParam {
            auth_id: data.id,
            email: data.email,
            name: data.name,
            profile_image: data.image_url,
        })
        .await?;

    tracing::info!("Synced user {} ({})", user.id, user.auth_id);

    Ok(json!({ "user_id": user.id }))
}

pub async fn delete_user(
    db: &DatabaseConnection,
    data: DeletedUserEventData,
) -> Result<Value, AppError> {
    let deleted = UserRepository::new(db).delete_by_auth_id(&data.id).await?;

    if deleted {
        tracing::info!("Deleted user {}", data.id);
    }

    Ok(json!({ "deleted": deleted }))
}
