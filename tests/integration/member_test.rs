//! Integration tests for the add, edit and display pages.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_home_and_forms_render() {
    let app = helpers::TestApp::new().await;
    app.add_member("Ada", "Lovelace", None).await;

    let home = app.get("/").await;
    assert_eq!(home.status, StatusCode::OK);
    assert!(home.text.contains(r#"href="/add""#));

    let add = app.get("/add").await;
    assert_eq!(add.status, StatusCode::OK);
    assert!(add.text.contains("Ada Lovelace"));
    assert!(add.text.contains(r#"enctype="multipart/form-data""#));

    let view = app.get("/view").await;
    assert_eq!(view.status, StatusCode::OK);
    assert!(view.text.contains("/api/members"));
}

#[tokio::test]
async fn test_home_does_not_need_database() {
    let app = helpers::TestApp::new().await;
    app.db_pool.close().await;

    let home = app.get("/").await;
    assert_eq!(home.status, StatusCode::OK);
    assert!(home.text.contains("Family Tree"));

    let display = app.get("/display").await;
    assert_eq!(display.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(display.text.starts_with("An error occurred: Database error"));
}

#[tokio::test]
async fn test_add_member_redirects_home() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form(
            "/add",
            &[
                ("first_name", "Ada"),
                ("middle_name", ""),
                ("last_name", "Lovelace"),
                ("birth_date", "1815-12-10"),
                ("spouse", "William King"),
                ("parent_id", ""),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/"));

    let ada = app.member(1).await;
    assert_eq!(ada.first_name, "Ada");
    assert_eq!(ada.middle_name, None);
    assert_eq!(ada.birth_date.as_deref(), Some("1815-12-10"));
    assert_eq!(ada.parent_id, None);
    assert_eq!(ada.image_file, None);
}

#[tokio::test]
async fn test_add_member_requires_names() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form("/add", &[("first_name", ""), ("last_name", "Lovelace")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/plain"))
    );
    assert!(
        response
            .text
            .starts_with("An error occurred: Invalid input: First name is required")
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM family_members")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_add_member_with_bad_parent() {
    let app = helpers::TestApp::new().await;

    let unknown = app
        .post_form(
            "/add",
            &[("first_name", "Lost"), ("last_name", "Child"), ("parent_id", "42")],
        )
        .await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert!(unknown.text.starts_with("An error occurred: Invalid input"));

    let malformed = app
        .post_form(
            "/add",
            &[("first_name", "Lost"), ("last_name", "Child"), ("parent_id", "abc")],
        )
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert!(malformed.text.contains("parent_id"));
}

#[tokio::test]
async fn test_add_member_with_photo_is_served() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_multipart(
            "/add",
            &[("first_name", "Ada"), ("last_name", "Lovelace"), ("parent_id", "")],
            Some(("ada portrait.jpg", &b"fake-jpeg"[..])),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.text);

    let ada = app.member(1).await;
    let image = ada.image_file.expect("photo reference");
    assert!(image.starts_with("uploads/"));
    assert!(image.ends_with("_ada_portrait.jpg"));

    let served = app.get(&format!("/{image}")).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.bytes, b"fake-jpeg");
}

#[tokio::test]
async fn test_edit_selection_and_form() {
    let app = helpers::TestApp::new().await;
    let ada = app.add_member("Ada", "Lovelace", None).await;
    app.add_member("Byron", "King", Some(ada.id.into_inner()))
        .await;

    let selection = app.get("/edit").await;
    assert_eq!(selection.status, StatusCode::OK);
    assert!(selection.text.contains(r#"name="member_id""#));
    assert!(selection.text.contains("Byron King"));

    let reselect = app.post_form("/edit", &[]).await;
    assert_eq!(reselect.status, StatusCode::OK);
    assert!(reselect.text.contains(r#"name="member_id""#));

    let form = app.post_form("/edit", &[("member_id", "2")]).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.text.contains(r#"name="member_id_hidden" value="2""#));
    assert!(form.text.contains(r#"name="first_name" value="Byron""#));
    assert!(form.text.contains(r#"<option value="1" selected>"#));

    let missing = app.post_form("/edit", &[("member_id", "99")]).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert!(missing.text.starts_with("An error occurred: Not found"));
}

#[tokio::test]
async fn test_edit_keeps_photo_without_upload() {
    let app = helpers::TestApp::new().await;
    app.post_multipart(
        "/add",
        &[("first_name", "Ada"), ("last_name", "Lovelace")],
        Some(("ada.jpg", &b"one"[..])),
    )
    .await;
    let original = app.member(1).await.image_file;
    assert!(original.is_some());

    // A browser sends an empty file part when no file was chosen.
    let response = app
        .post_multipart(
            "/edit",
            &[
                ("member_id_hidden", "1"),
                ("first_name", "Augusta Ada"),
                ("last_name", "King"),
                ("parent_id", ""),
            ],
            Some(("", &b""[..])),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.text);

    let edited = app.member(1).await;
    assert_eq!(edited.first_name, "Augusta Ada");
    assert_eq!(edited.last_name, "King");
    assert_eq!(edited.image_file, original);
}

#[tokio::test]
async fn test_edit_replaces_photo_with_upload() {
    let app = helpers::TestApp::new().await;
    app.post_multipart(
        "/add",
        &[("first_name", "Ada"), ("last_name", "Lovelace")],
        Some(("old.jpg", &b"old"[..])),
    )
    .await;

    let response = app
        .post_multipart(
            "/edit",
            &[
                ("member_id_hidden", "1"),
                ("first_name", "Ada"),
                ("last_name", "Lovelace"),
            ],
            Some(("new.jpg", &b"new"[..])),
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let image = app.member(1).await.image_file.unwrap();
    assert!(image.ends_with("_new.jpg"));
}

#[tokio::test]
async fn test_edit_clears_parent_and_rejects_cycles() {
    let app = helpers::TestApp::new().await;
    let ada = app.add_member("Ada", "Lovelace", None).await;
    let byron = app
        .add_member("Byron", "King", Some(ada.id.into_inner()))
        .await;

    let ada_id = ada.id.to_string();
    let byron_id = byron.id.to_string();
    let cycle = app
        .post_form(
            "/edit",
            &[
                ("member_id_hidden", ada_id.as_str()),
                ("first_name", "Ada"),
                ("last_name", "Lovelace"),
                ("parent_id", byron_id.as_str()),
            ],
        )
        .await;
    assert_eq!(cycle.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.member(1).await.parent_id, None);

    let cleared = app
        .post_form(
            "/edit",
            &[
                ("member_id_hidden", byron_id.as_str()),
                ("first_name", "Byron"),
                ("last_name", "King"),
                ("parent_id", ""),
            ],
        )
        .await;
    assert_eq!(cleared.status, StatusCode::SEE_OTHER);
    assert_eq!(app.member(2).await.parent_id, None);
}

#[tokio::test]
async fn test_edit_commit_missing_member() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form(
            "/edit",
            &[
                ("member_id_hidden", "5"),
                ("first_name", "No"),
                ("last_name", "One"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_display_lists_relations() {
    let app = helpers::TestApp::new().await;
    let ada = app.add_member("Ada", "Lovelace", None).await;
    let byron = app
        .add_member("Byron", "King", Some(ada.id.into_inner()))
        .await;
    app.add_member("Ralph", "King", Some(byron.id.into_inner()))
        .await;

    let page = app.get("/display").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.text.contains("3 member(s) in 1 tree(s)"));
    assert!(page.text.contains("Ralph King"));
    assert!(page.text.contains("Lineage: Byron &larr; Ada"));
}
