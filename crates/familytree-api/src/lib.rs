//! # familytree-api
//!
//! HTTP layer for the family tree service built on Axum.
//!
//! Serves the HTML pages (home, tree view, add, edit, display), the JSON
//! member listing, a health check, and the stored photos.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod views;

pub use router::build_router;
pub use state::AppState;
