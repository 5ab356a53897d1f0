use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::{create_user, UserFactory}};

mod delete_by_auth_id;
mod find_by_auth_id;
mod find_by_id;
mod upsert;

fn upsert_param(auth_id: &str, name: &str) -> UpsertUserParam {
    UpsertUserParam {
        auth_id: auth_id.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        name: name.to_string(),
        profile_image: None,
    }
}
