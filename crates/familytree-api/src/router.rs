//! Route definitions for the family tree service.
//!
//! HTML pages live at the root, JSON endpoints under `/api`, and stored
//! photos under the configured public prefix. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{Router, extract::DefaultBodyLimit, middleware as axum_middleware, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let mut router = Router::new()
        .merge(page_routes())
        .merge(member_routes())
        .nest("/api", api_routes());

    let prefix = state.config.storage.public_prefix.trim_matches('/');
    if !prefix.is_empty() {
        router = router.nest_service(
            &format!("/{prefix}"),
            ServeDir::new(&state.config.storage.upload_dir),
        );
    }

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    router
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Home, tree view and member listing
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/view", get(handlers::pages::view_tree))
        .route("/display", get(handlers::pages::display))
}

/// Add and edit forms
fn member_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/add",
            get(handlers::member::add_form).post(handlers::member::add_member),
        )
        .route(
            "/edit",
            get(handlers::member::edit_selection).post(handlers::member::edit_member),
        )
}

/// JSON listing and health
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(handlers::api::list_members))
        .route("/health", get(handlers::health::health))
}
