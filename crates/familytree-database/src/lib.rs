//! # familytree-database
//!
//! SQLite connection management, schema migrations, and the concrete
//! repository for family members.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
