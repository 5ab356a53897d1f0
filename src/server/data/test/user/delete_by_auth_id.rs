use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok(true) and user no longer found
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).auth_id("user_a").build().await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete_by_auth_id("user_a").await?;

    assert!(deleted);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_nothing_deleted_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete_by_auth_id("user_missing").await?;

    assert!(!deleted);

    Ok(())
}
