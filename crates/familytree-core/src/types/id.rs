//! Newtype wrapper around the integer primary key of a family member.
//!
//! Keeping the id distinct from plain integers prevents passing an
//! unrelated number where a member reference is expected. The wrapper is
//! transparent for both serde and sqlx.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a family member, assigned by the database on insert.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct MemberId(pub i64);

impl MemberId {
    /// Return the inner integer value.
    pub fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse an optional id from a form value.
    ///
    /// Blank input means "no id"; anything else must be an integer.
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, std::num::ParseIntError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl From<i64> for MemberId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> i64 {
        id.0
    }
}
