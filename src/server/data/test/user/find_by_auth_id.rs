use super::*;

/// Tests finding a user by the auth provider subject id.
///
/// Expected: Ok(Some) for the matching user only
#[tokio::test]
async fn finds_user_by_auth_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_user(db).await?;
    UserFactory::new(db).auth_id("user_a").build().await?;
    let target = UserFactory::new(db).auth_id("user_b").build().await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_auth_id("user_b").await?;

    assert_eq!(user.map(|u| u.id), Some(target.id));
    assert!(repo.find_by_auth_id("user_c").await?.is_none());

    Ok(())
}
