//! Request handlers, one module per route group.

pub mod api;
pub mod health;
pub mod member;
pub mod pages;
