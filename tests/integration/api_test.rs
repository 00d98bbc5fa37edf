//! Integration tests for the JSON endpoints.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_list_members_empty() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/members").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), serde_json::json!([]));
}

#[tokio::test]
async fn test_parent_expanded_one_level() {
    let app = helpers::TestApp::new().await;
    let ada = app.add_member("Ada", "Lovelace", None).await;
    let byron = app
        .add_member("Byron", "King", Some(ada.id.into_inner()))
        .await;
    app.add_member("Ralph", "King", Some(byron.id.into_inner()))
        .await;

    let response = app.get("/api/members").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    let members = body.as_array().expect("array body");
    assert_eq!(members.len(), 3);

    assert_eq!(members[0]["first_name"], "Ada");
    assert!(members[0]["parent_id"].is_null());
    assert!(members[0]["parent"].is_null());

    assert_eq!(members[1]["first_name"], "Byron");
    assert_eq!(members[1]["parent"]["first_name"], "Ada");
    assert_eq!(members[1]["parent"]["id"], ada.id.into_inner());

    let ralph = &members[2];
    assert_eq!(ralph["parent_id"], byron.id.into_inner());
    assert_eq!(ralph["parent"]["id"], byron.id.into_inner());
    assert_eq!(ralph["parent"]["parent_id"], ada.id.into_inner());
    assert!(ralph["parent"]["parent"].is_null());
}

#[tokio::test]
async fn test_every_scalar_field_listed() {
    let app = helpers::TestApp::new().await;
    app.post_form(
        "/add",
        &[
            ("first_name", "Ada"),
            ("middle_name", "Augusta"),
            ("last_name", "Lovelace"),
            ("suffix", "Countess"),
            ("birth_date", "1815-12-10"),
            ("spouse", "William King"),
            ("wedding_anniversary", "1835-07-08"),
            ("bio", "Mathematician"),
            ("favorite_memories", "Notes on the Analytical Engine"),
        ],
    )
    .await;

    let body = app.get("/api/members").await.json();
    let ada = &body[0];
    assert_eq!(ada["id"], 1);
    assert_eq!(ada["middle_name"], "Augusta");
    assert_eq!(ada["suffix"], "Countess");
    assert_eq!(ada["birth_date"], "1815-12-10");
    assert_eq!(ada["spouse"], "William King");
    assert_eq!(ada["wedding_anniversary"], "1835-07-08");
    assert_eq!(ada["bio"], "Mathematician");
    assert_eq!(ada["favorite_memories"], "Notes on the Analytical Engine");
    assert!(ada["image_file"].is_null());
}

#[tokio::test]
async fn test_list_members_storage_failure() {
    let app = helpers::TestApp::new().await;
    app.add_member("Ada", "Lovelace", None).await;
    app.db_pool.close().await;

    let response = app.get("/api/members").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json()["error"]
        .as_str()
        .map(String::from)
        .unwrap_or_default();
    assert!(error.starts_with("Database error"), "{error}");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], "connected");
}

#[tokio::test]
async fn test_health_degraded_when_database_closed() {
    let app = helpers::TestApp::new().await;
    app.db_pool.close().await;

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json()["data"]["database"], "unavailable");
}
