//! Family member entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use familytree_core::types::MemberId;

/// One person in the family tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FamilyMember {
    /// Unique member identifier, assigned on insert.
    pub id: MemberId,
    /// Given name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: String,
    /// Name suffix (Jr., III, ...).
    pub suffix: Option<String>,
    /// Birth date as free text.
    pub birth_date: Option<String>,
    /// Parent member (null for roots).
    pub parent_id: Option<MemberId>,
    /// Spouse name as free text.
    pub spouse: Option<String>,
    /// Wedding anniversary as free text.
    pub wedding_anniversary: Option<String>,
    /// Biography.
    pub bio: Option<String>,
    /// Favorite memories.
    pub favorite_memories: Option<String>,
    /// Reference to the stored photo.
    pub image_file: Option<String>,
}

impl FamilyMember {
    /// Check if this is a root member (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Name for lists and headings: first, middle, last, suffix.
    pub fn display_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
            self.suffix.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// The editable field set shared by create and edit.
///
/// `image_file` is not part of it: create takes the stored photo reference
/// separately and edit only replaces it when a new photo is uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFields {
    /// Given name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: String,
    /// Name suffix.
    pub suffix: Option<String>,
    /// Birth date as free text.
    pub birth_date: Option<String>,
    /// Parent member (None for a root).
    pub parent_id: Option<MemberId>,
    /// Spouse name.
    pub spouse: Option<String>,
    /// Wedding anniversary.
    pub wedding_anniversary: Option<String>,
    /// Biography.
    pub bio: Option<String>,
    /// Favorite memories.
    pub favorite_memories: Option<String>,
}

impl MemberFields {
    /// Fields with only the required names set.
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Set the parent.
    pub fn with_parent(mut self, parent_id: Option<MemberId>) -> Self {
        self.parent_id = parent_id;
        self
    }
}
