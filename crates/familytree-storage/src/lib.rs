//! # familytree-storage
//!
//! Photo store implementations. Only the local filesystem is supported.

pub mod providers;

pub use providers::local::LocalPhotoStore;
