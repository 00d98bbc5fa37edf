//! In-memory view of the parent/child relation.
//!
//! Members form a forest: every member has at most one parent and any
//! number of children. Nothing in storage prevents a cycle in rows written
//! before cycle checks existed, so every traversal here is bounded.

use std::collections::{HashMap, HashSet};

use familytree_core::types::MemberId;

use super::model::FamilyMember;

/// Parent and children lookups over a borrowed set of members.
#[derive(Debug)]
pub struct FamilyForest<'a> {
    /// Members in the order they were supplied.
    members: &'a [FamilyMember],
    /// Member by id.
    by_id: HashMap<MemberId, &'a FamilyMember>,
    /// Children by parent id, in supply order.
    children: HashMap<MemberId, Vec<&'a FamilyMember>>,
}

impl<'a> FamilyForest<'a> {
    /// Index a set of members.
    pub fn new(members: &'a [FamilyMember]) -> Self {
        let by_id: HashMap<MemberId, &FamilyMember> = members.iter().map(|m| (m.id, m)).collect();

        let mut children: HashMap<MemberId, Vec<&FamilyMember>> = HashMap::new();
        for member in members {
            if let Some(parent_id) = member.parent_id {
                children.entry(parent_id).or_default().push(member);
            }
        }

        Self {
            members,
            by_id,
            children,
        }
    }

    /// Number of members in the forest.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the forest has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a member by id.
    pub fn get(&self, id: MemberId) -> Option<&'a FamilyMember> {
        self.by_id.get(&id).copied()
    }

    /// The immediate parent of a member, if it is part of this forest.
    pub fn parent_of(&self, member: &FamilyMember) -> Option<&'a FamilyMember> {
        member.parent_id.and_then(|id| self.get(id))
    }

    /// Direct children of a member.
    pub fn children_of(&self, id: MemberId) -> &[&'a FamilyMember] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Members with no parent, or whose parent is not in this forest.
    pub fn roots(&self) -> Vec<&'a FamilyMember> {
        self.members
            .iter()
            .filter(|m| self.parent_of(m).is_none())
            .collect()
    }

    /// Ancestor chain of a member, nearest first.
    ///
    /// Stops at a root, at a parent missing from the forest, or when a
    /// member would be visited twice.
    pub fn ancestors(&self, id: MemberId) -> Vec<&'a FamilyMember> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = self.get(id);

        while let Some(parent) = current.and_then(|m| self.parent_of(m)) {
            if !seen.insert(parent.id) {
                break;
            }
            chain.push(parent);
            current = Some(parent);
        }

        chain
    }
}
