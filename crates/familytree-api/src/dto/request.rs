//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use familytree_core::error::AppError;
use familytree_core::result::AppResult;
use familytree_core::types::MemberId;
use familytree_entity::member::MemberFields;

use crate::extractors::SubmittedForm;

/// The member fields of an add or edit submission.
///
/// Blank optional fields become `None`; a blank `parent_id` makes the
/// member a root.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberForm {
    /// Given name.
    #[validate(length(min = 1, max = 50, message = "First name is required (at most 50 characters)"))]
    pub first_name: String,
    /// Middle name.
    #[validate(length(max = 50, message = "Middle name must be at most 50 characters"))]
    pub middle_name: Option<String>,
    /// Family name.
    #[validate(length(min = 1, max = 50, message = "Last name is required (at most 50 characters)"))]
    pub last_name: String,
    /// Name suffix.
    #[validate(length(max = 10, message = "Suffix must be at most 10 characters"))]
    pub suffix: Option<String>,
    /// Birth date as free text.
    #[validate(length(max = 50, message = "Birth date must be at most 50 characters"))]
    pub birth_date: Option<String>,
    /// Parent member.
    pub parent_id: Option<MemberId>,
    /// Spouse.
    #[validate(length(max = 100, message = "Spouse must be at most 100 characters"))]
    pub spouse: Option<String>,
    /// Wedding anniversary.
    #[validate(length(max = 50, message = "Wedding anniversary must be at most 50 characters"))]
    pub wedding_anniversary: Option<String>,
    /// Biography.
    pub bio: Option<String>,
    /// Favorite memories.
    pub favorite_memories: Option<String>,
}

impl MemberForm {
    /// Read and validate the member fields of a submission.
    pub fn from_submission(form: &SubmittedForm) -> AppResult<Self> {
        let parent_raw = form.get("parent_id").unwrap_or("");
        let parent_id = MemberId::parse_optional(parent_raw).map_err(|_| {
            AppError::validation(format!("Invalid parent_id '{parent_raw}': expected a member id"))
        })?;

        let parsed = Self {
            first_name: text(form, "first_name"),
            middle_name: optional(form, "middle_name"),
            last_name: text(form, "last_name"),
            suffix: optional(form, "suffix"),
            birth_date: optional(form, "birth_date"),
            parent_id,
            spouse: optional(form, "spouse"),
            wedding_anniversary: optional(form, "wedding_anniversary"),
            bio: optional(form, "bio"),
            favorite_memories: optional(form, "favorite_memories"),
        };
        parsed.validate()?;
        Ok(parsed)
    }

    /// Convert into the entity field set.
    pub fn into_fields(self) -> MemberFields {
        MemberFields {
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            suffix: self.suffix,
            birth_date: self.birth_date,
            parent_id: self.parent_id,
            spouse: self.spouse,
            wedding_anniversary: self.wedding_anniversary,
            bio: self.bio,
            favorite_memories: self.favorite_memories,
        }
    }
}

/// What a POST to `/edit` asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// No member chosen: show the selection list.
    Select,
    /// `member_id`: show the edit form for this member.
    Open(MemberId),
    /// `member_id_hidden`: save the submitted fields to this member.
    Commit(MemberId),
}

impl EditAction {
    /// Decide the edit phase from the submitted field names.
    pub fn from_submission(form: &SubmittedForm) -> AppResult<Self> {
        if let Some(raw) = form.get("member_id_hidden") {
            return parse_member_id(raw).map(Self::Commit);
        }
        match form.get("member_id") {
            Some(raw) if !raw.trim().is_empty() => parse_member_id(raw).map(Self::Open),
            _ => Ok(Self::Select),
        }
    }
}

fn parse_member_id(raw: &str) -> AppResult<MemberId> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("Invalid member id '{raw}'")))
}

fn text(form: &SubmittedForm, name: &str) -> String {
    form.get(name).unwrap_or("").trim().to_string()
}

fn optional(form: &SubmittedForm, name: &str) -> Option<String> {
    form.get(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
