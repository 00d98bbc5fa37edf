//! Core traits defined in `familytree-core` and implemented by other crates.

pub mod storage;

pub use storage::{PhotoStore, UploadedPhoto};
