//! Response DTOs.

use serde::{Deserialize, Serialize};

use familytree_core::types::MemberId;
use familytree_entity::member::FamilyMember;
use familytree_service::member::MemberWithParent;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// One member in the JSON listing.
///
/// `parent` holds only the immediate parent; its own `parent` is always
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: MemberId,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub birth_date: Option<String>,
    pub parent_id: Option<MemberId>,
    pub spouse: Option<String>,
    pub wedding_anniversary: Option<String>,
    pub bio: Option<String>,
    pub favorite_memories: Option<String>,
    pub image_file: Option<String>,
    pub parent: Option<Box<MemberResponse>>,
}

impl From<FamilyMember> for MemberResponse {
    fn from(m: FamilyMember) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            middle_name: m.middle_name,
            last_name: m.last_name,
            suffix: m.suffix,
            birth_date: m.birth_date,
            parent_id: m.parent_id,
            spouse: m.spouse,
            wedding_anniversary: m.wedding_anniversary,
            bio: m.bio,
            favorite_memories: m.favorite_memories,
            image_file: m.image_file,
            parent: None,
        }
    }
}

impl From<MemberWithParent> for MemberResponse {
    fn from(entry: MemberWithParent) -> Self {
        Self {
            parent: entry.parent.map(|p| Box::new(MemberResponse::from(p))),
            ..MemberResponse::from(entry.member)
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `connected` or `unavailable`.
    pub database: String,
    /// `available` or `unavailable`.
    pub storage: String,
}
