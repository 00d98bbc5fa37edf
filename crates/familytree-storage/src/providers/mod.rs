//! Photo store providers.

pub mod local;
