//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use familytree_core::config::AppConfig;
use familytree_core::traits::storage::PhotoStore;
use familytree_service::member::MemberService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// cheap to clone; nothing here is mutated by a request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Photo store
    pub photo_store: Arc<dyn PhotoStore>,
    /// Member service
    pub member_service: Arc<MemberService>,
}
