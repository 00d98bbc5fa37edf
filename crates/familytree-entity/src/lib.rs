//! # familytree-entity
//!
//! Domain entity models. [`member::FamilyMember`] is the only table row;
//! [`member::FamilyForest`] is an in-memory view of the parent/child
//! relation built from a set of rows.

pub mod member;
