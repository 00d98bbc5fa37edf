//! Member create, edit and listing operations.

use std::sync::Arc;

use tracing::{info, warn};

use familytree_core::error::AppError;
use familytree_core::traits::storage::{PhotoStore, UploadedPhoto};
use familytree_core::types::MemberId;
use familytree_database::repositories::member::MemberRepository;
use familytree_entity::member::{FamilyForest, FamilyMember, MemberFields};

/// Manages family member records and their photos.
#[derive(Debug, Clone)]
pub struct MemberService {
    /// Member repository.
    member_repo: Arc<MemberRepository>,
    /// Photo store.
    photos: Arc<dyn PhotoStore>,
}

/// A member together with its immediate parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberWithParent {
    /// The member.
    pub member: FamilyMember,
    /// The member's parent, `None` for roots.
    pub parent: Option<FamilyMember>,
}

impl MemberService {
    /// Creates a new member service.
    pub fn new(member_repo: Arc<MemberRepository>, photos: Arc<dyn PhotoStore>) -> Self {
        Self {
            member_repo,
            photos,
        }
    }

    /// All members in insertion order.
    pub async fn list_members(&self) -> Result<Vec<FamilyMember>, AppError> {
        self.member_repo.find_all().await
    }

    /// All members sorted by last name.
    pub async fn list_members_by_last_name(&self) -> Result<Vec<FamilyMember>, AppError> {
        self.member_repo.find_all_by_last_name().await
    }

    /// All members in insertion order, each paired with its parent.
    pub async fn list_with_parents(&self) -> Result<Vec<MemberWithParent>, AppError> {
        let members = self.member_repo.find_all().await?;
        let forest = FamilyForest::new(&members);

        Ok(members
            .iter()
            .map(|member| MemberWithParent {
                member: member.clone(),
                parent: forest.parent_of(member).cloned(),
            })
            .collect())
    }

    /// Gets a member by ID.
    pub async fn get_member(&self, id: MemberId) -> Result<FamilyMember, AppError> {
        self.member_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Member {id} not found")))
    }

    /// Creates a new member, storing the photo first if one was uploaded.
    ///
    /// If the insert fails after the photo was stored, the photo file stays
    /// on disk.
    pub async fn create_member(
        &self,
        fields: MemberFields,
        photo: Option<UploadedPhoto>,
    ) -> Result<FamilyMember, AppError> {
        validate_names(&fields)?;
        if let Some(parent_id) = fields.parent_id {
            self.require_parent(parent_id).await?;
        }

        let image_file = self.store_photo(photo).await?;
        let member = self
            .member_repo
            .create(&fields, image_file.as_deref())
            .await?;

        info!(
            member_id = %member.id,
            parent_id = ?member.parent_id,
            has_photo = member.image_file.is_some(),
            "Member created"
        );
        Ok(member)
    }

    /// Overwrites every editable field of a member.
    ///
    /// The photo reference is replaced only when a new photo is uploaded.
    /// A parent that would make the member its own ancestor is rejected.
    pub async fn update_member(
        &self,
        id: MemberId,
        fields: MemberFields,
        photo: Option<UploadedPhoto>,
    ) -> Result<FamilyMember, AppError> {
        validate_names(&fields)?;
        let existing = self.get_member(id).await?;

        if let Some(parent_id) = fields.parent_id {
            self.require_acyclic_parent(id, parent_id).await?;
        }

        let image_file = match self.store_photo(photo).await? {
            Some(stored) => Some(stored),
            None => existing.image_file,
        };

        let member = self
            .member_repo
            .update(id, &fields, image_file.as_deref())
            .await?;

        info!(
            member_id = %member.id,
            parent_id = ?member.parent_id,
            "Member updated"
        );
        Ok(member)
    }

    async fn require_parent(&self, parent_id: MemberId) -> Result<(), AppError> {
        if self.member_repo.exists(parent_id).await? {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Parent member {parent_id} does not exist"
            )))
        }
    }

    async fn require_acyclic_parent(
        &self,
        id: MemberId,
        parent_id: MemberId,
    ) -> Result<(), AppError> {
        if parent_id == id {
            return Err(AppError::validation(
                "A member cannot be their own parent",
            ));
        }
        self.require_parent(parent_id).await?;

        let ancestors = self.member_repo.find_ancestors(parent_id).await?;
        if ancestors.iter().any(|m| m.id == id) {
            warn!(member_id = %id, parent_id = %parent_id, "Rejected cyclic parent");
            return Err(AppError::validation(format!(
                "Member {parent_id} is a descendant of member {id} and cannot be its parent"
            )));
        }
        Ok(())
    }

    async fn store_photo(&self, photo: Option<UploadedPhoto>) -> Result<Option<String>, AppError> {
        match photo {
            Some(photo) if !photo.is_empty() => {
                let reference = self.photos.store(&photo).await?;
                Ok(Some(reference))
            }
            _ => Ok(None),
        }
    }
}

fn validate_names(fields: &MemberFields) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if fields.first_name.trim().is_empty() {
        missing.push("First name is required");
    }
    if fields.last_name.trim().is_empty() {
        missing.push("Last name is required");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(missing.join("; ")))
    }
}
