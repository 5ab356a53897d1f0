use super::*;

/// Expect the health probe to answer with a fixed JSON body
#[tokio::test]
async fn health_returns_success_message() {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let app = test_app(&mut test, test_config(&[])).await;

    let response = app.oneshot(get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_json(response).await, json!({"msg": "Success from health"}));
}

/// Expect the health probe to be idempotent
#[tokio::test]
async fn health_is_repeatable() {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let app = test_app(&mut test, test_config(&[])).await;

    for _ in 0..3 {
        let response = app.clone().oneshot(get("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

/// Expect the books endpoint to answer with its fixed JSON body
#[tokio::test]
async fn books_returns_success_message() {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let app = test_app(&mut test, test_config(&[])).await;

    let response = app.oneshot(get("/books", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"msg": "Success from books"}));
}

/// Expect the health probe to answer the same way for a signed-in caller
#[tokio::test]
async fn health_ignores_auth_state() {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let app = test_app(&mut test, test_config(&[])).await;
    let user = factory::user::create_user(test.db.as_ref().unwrap())
        .await
        .unwrap();
    let cookie = signed_in_cookie(&mut test, user.id).await;

    let response = app
        .oneshot(get("/health", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"msg": "Success from health"}));
}
