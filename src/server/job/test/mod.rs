use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::{
    data::user::UserRepository,
    error::{job::JobError, AppError},
    job::{JobBridge, JobEvent, JobFunction},
};

fn event(name: &str, data: serde_json::Value) -> JobEvent {
    JobEvent {
        name: name.to_string(),
        data,
    }
}

/// Expect every function to be listed with its trigger
#[test]
fn introspection_lists_registered_functions() {
    let introspection = JobBridge::introspect();

    assert_eq!(introspection.app_id, "codearena");
    let pairs: Vec<(&str, &str)> = introspection
        .functions
        .iter()
        .map(|f| (f.id.as_str(), f.trigger.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("sync-user", "auth/user.created"),
            ("delete-user", "auth/user.deleted")
        ]
    );
}

/// Expect function ids to resolve back to their function
#[test]
fn resolves_function_ids() {
    for function in JobFunction::ALL {
        assert_eq!(JobFunction::from_id(function.id()), Some(function));
    }
    assert_eq!(JobFunction::from_id("unknown"), None);
}

/// Expect only the exact signing key to verify
#[tokio::test]
async fn verifies_signing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = JobBridge::new(db, "signing-key");

    assert!(bridge.verify(Some("signing-key")).is_ok());
    assert!(matches!(
        bridge.verify(Some("other")),
        Err(JobError::InvalidSigningKey)
    ));
    assert!(matches!(bridge.verify(None), Err(JobError::InvalidSigningKey)));

    Ok(())
}

/// Expect the sync function to create the user from the event
#[tokio::test]
async fn sync_user_creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = JobBridge::new(db, "signing-key");

    let output = bridge
        .invoke(
            "sync-user",
            event(
                "auth/user.created",
                json!({"id": "user_2abc", "email": "ada@example.com", "name": "Ada", "image_url": null}),
            ),
        )
        .await?;

    let user = UserRepository::new(db)
        .find_by_auth_id("user_2abc")
        .await?
        .unwrap();
    assert_eq!(output, json!({ "user_id": user.id }));
    assert_eq!(user.name, "Ada");

    Ok(())
}

/// Expect the delete function to remove the user named by the event
#[tokio::test]
async fn delete_user_removes_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db).auth_id("user_2abc").build().await?;
    let bridge = JobBridge::new(db, "signing-key");

    let output = bridge
        .invoke(
            "delete-user",
            event("auth/user.deleted", json!({"id": "user_2abc"})),
        )
        .await?;

    assert_eq!(output, json!({ "deleted": true }));
    assert!(UserRepository::new(db)
        .find_by_auth_id("user_2abc")
        .await?
        .is_none());

    Ok(())
}

/// Expect an unknown function id to be rejected before any work
#[tokio::test]
async fn rejects_unknown_function() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = JobBridge::new(db, "signing-key");

    let result = bridge
        .invoke("reindex", event("auth/user.created", json!({})))
        .await;

    assert!(matches!(
        result,
        Err(AppError::JobErr(JobError::UnknownFunction(ref id))) if id == "reindex"
    ));

    Ok(())
}

/// Expect an event other than the function's trigger to be rejected
#[tokio::test]
async fn rejects_trigger_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = JobBridge::new(db, "signing-key");

    let result = bridge
        .invoke(
            "delete-user",
            event("auth/user.created", json!({"id": "user_2abc"})),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::JobErr(JobError::TriggerMismatch { .. }))
    ));

    Ok(())
}

/// Expect event data missing required fields to be rejected
#[tokio::test]
async fn rejects_malformed_event_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bridge = JobBridge::new(db, "signing-key");

    let result = bridge
        .invoke(
            "sync-user",
            event("auth/user.created", json!({"id": "user_2abc"})),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::JobErr(JobError::InvalidEventData { .. }))
    ));

    Ok(())
}
