//! Family member domain entities.

pub mod forest;
pub mod model;

pub use forest::FamilyForest;
pub use model::{FamilyMember, MemberFields};
