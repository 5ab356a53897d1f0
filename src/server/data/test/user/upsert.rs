use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with user created with the provided profile fields
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(upsert_param("user_1", "Ada")).await?;

    assert_eq!(user.auth_id, "user_1");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.profile_image, None);

    Ok(())
}

/// Tests upserting a user that already exists.
///
/// Verifies the existing row is updated in place rather than duplicated.
///
/// Expected: Ok with same id and refreshed profile fields
#[tokio::test]
async fn updates_existing_user_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let original = repo.upsert(upsert_param("user_1", "Ada")).await?;

    let mut param = upsert_param("user_1", "Ada Lovelace");
    param.profile_image = Some("https://img.example.com/ada.png".to_string());
    let updated = repo.upsert(param).await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "Ada Lovelace");
    assert_eq!(
        updated.profile_image.as_deref(),
        Some("https://img.example.com/ada.png")
    );
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests upserting without the user table.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.upsert(upsert_param("user_1", "Ada")).await;

    assert!(result.is_err());

    Ok(())
}
