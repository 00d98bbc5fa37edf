//! Family member operations.

pub mod service;

pub use service::{MemberService, MemberWithParent};
