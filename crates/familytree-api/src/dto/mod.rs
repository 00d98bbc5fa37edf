//! Data transfer objects for form input and JSON output.

pub mod request;
pub mod response;
