//! # familytree-core
//!
//! Core crate for the family tree service. Contains the photo store trait,
//! configuration schemas, the typed member identifier, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other family tree crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
