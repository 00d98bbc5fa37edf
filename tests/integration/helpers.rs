//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use familytree_core::config::AppConfig;
use familytree_core::traits::storage::PhotoStore;
use familytree_database::DatabasePool;
use familytree_database::repositories::member::MemberRepository;
use familytree_entity::member::FamilyMember;
use familytree_service::MemberService;
use familytree_storage::LocalPhotoStore;

const BOUNDARY: &str = "familytree-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: SqlitePool,
    /// Application config
    pub config: AppConfig,
    /// Upload directory, removed on drop
    pub upload_dir: TempDir,
}

impl TestApp {
    /// Create a new test application backed by an in-memory database
    pub async fn new() -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let mut config = AppConfig::default();
        config.database.url = "sqlite::memory:".to_string();
        config.storage.upload_dir = upload_dir.path().to_string_lossy().into_owned();

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        familytree_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let photo_store: Arc<dyn PhotoStore> = Arc::new(
            LocalPhotoStore::new(&config.storage.upload_dir, &config.storage.public_prefix)
                .await
                .expect("Failed to init photo store"),
        );
        let member_repo = Arc::new(MemberRepository::new(db.pool().clone()));
        let member_service = Arc::new(MemberService::new(member_repo, Arc::clone(&photo_store)));

        let state = familytree_api::AppState {
            config: Arc::new(config.clone()),
            db_pool: db.pool().clone(),
            photo_store,
            member_service,
        };

        Self {
            router: familytree_api::build_router(state),
            db_pool: db.into_pool(),
            config,
            upload_dir,
        }
    }

    /// Send a GET request
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Send a urlencoded form POST
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Send a multipart form POST, optionally with an `image_file` part
    pub async fn post_multipart(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        photo: Option<(&str, &[u8])>,
    ) -> TestResponse {
        let mut body: Vec<u8> = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, data)) = photo {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image_file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Add a member through the form and return it as stored
    pub async fn add_member(&self, first: &str, last: &str, parent: Option<i64>) -> FamilyMember {
        let parent = parent.map(|p| p.to_string()).unwrap_or_default();
        let response = self
            .post_form(
                "/add",
                &[("first_name", first), ("last_name", last), ("parent_id", parent.as_str())],
            )
            .await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.text);

        sqlx::query_as::<_, FamilyMember>(
            "SELECT * FROM family_members ORDER BY id DESC LIMIT 1",
        )
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to read back member")
    }

    /// Load a member directly from the database
    pub async fn member(&self, id: i64) -> FamilyMember {
        sqlx::query_as::<_, FamilyMember>("SELECT * FROM family_members WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.db_pool)
            .await
            .expect("Member not found")
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            location,
            content_type,
            bytes: body_bytes.to_vec(),
            text: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// `Location` header, if any
    pub location: Option<String>,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Raw body
    pub bytes: Vec<u8>,
    /// Body as text
    pub text: String,
}

impl TestResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(Value::Null)
    }
}

fn url_encode(raw: &str) -> String {
    let mut out = String::new();
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
