//! # familytree-service
//!
//! Business logic layer. Handlers call [`member::MemberService`]; it owns
//! the checks that span more than one row (parent existence, cycles) and
//! the ordering of photo storage relative to the database write.

pub mod member;

pub use member::MemberService;
