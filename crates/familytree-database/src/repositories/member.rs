//! Family member repository implementation.

use sqlx::SqlitePool;
use sqlx::error::ErrorKind as DbErrorKind;

use familytree_core::error::{AppError, ErrorKind};
use familytree_core::result::AppResult;
use familytree_core::types::MemberId;
use familytree_entity::member::{FamilyMember, MemberFields};

/// Repository for member CRUD and tree queries.
///
/// Every write is a single statement, so a failed insert or update never
/// leaves a partially written row behind.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All members in insertion order.
    pub async fn find_all(&self) -> AppResult<Vec<FamilyMember>> {
        sqlx::query_as::<_, FamilyMember>("SELECT * FROM family_members ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list members", e))
    }

    /// All members ordered by last name.
    pub async fn find_all_by_last_name(&self) -> AppResult<Vec<FamilyMember>> {
        sqlx::query_as::<_, FamilyMember>(
            "SELECT * FROM family_members ORDER BY last_name ASC, first_name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list members", e))
    }

    /// Find a member by ID.
    pub async fn find_by_id(&self, id: MemberId) -> AppResult<Option<FamilyMember>> {
        sqlx::query_as::<_, FamilyMember>("SELECT * FROM family_members WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find member", e))
    }

    /// Check whether a member exists.
    pub async fn exists(&self, id: MemberId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM family_members WHERE id = ?1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check member", e))
    }

    /// Ancestor chain of a member, nearest first.
    ///
    /// The recursion depth is capped at the table size, so rows that already
    /// form a cycle still produce a finite result.
    pub async fn find_ancestors(&self, id: MemberId) -> AppResult<Vec<FamilyMember>> {
        sqlx::query_as::<_, FamilyMember>(
            "WITH RECURSIVE bound(max_depth) AS ( \
                SELECT COUNT(*) FROM family_members \
             ), \
             ancestors(id, depth) AS ( \
                SELECT parent_id, 1 FROM family_members \
                    WHERE id = ?1 AND parent_id IS NOT NULL \
                UNION ALL \
                SELECT m.parent_id, a.depth + 1 FROM family_members m \
                    INNER JOIN ancestors a ON m.id = a.id \
                    CROSS JOIN bound b \
                    WHERE m.parent_id IS NOT NULL \
                    AND a.depth < b.max_depth \
             ) \
             SELECT m.* FROM family_members m \
             INNER JOIN (SELECT id, MIN(depth) AS depth FROM ancestors GROUP BY id) a \
                ON m.id = a.id \
             ORDER BY a.depth ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ancestors", e))
    }

    /// Insert a new member and return it with its assigned id.
    pub async fn create(
        &self,
        data: &MemberFields,
        image_file: Option<&str>,
    ) -> AppResult<FamilyMember> {
        sqlx::query_as::<_, FamilyMember>(
            "INSERT INTO family_members \
                (first_name, middle_name, last_name, suffix, birth_date, parent_id, \
                 spouse, wedding_anniversary, bio, favorite_memories, image_file) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11) RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.middle_name)
        .bind(&data.last_name)
        .bind(&data.suffix)
        .bind(&data.birth_date)
        .bind(data.parent_id)
        .bind(&data.spouse)
        .bind(&data.wedding_anniversary)
        .bind(&data.bio)
        .bind(&data.favorite_memories)
        .bind(image_file)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create member"))
    }

    /// Overwrite every editable field and the photo reference of a member.
    pub async fn update(
        &self,
        id: MemberId,
        data: &MemberFields,
        image_file: Option<&str>,
    ) -> AppResult<FamilyMember> {
        sqlx::query_as::<_, FamilyMember>(
            "UPDATE family_members SET \
                first_name = ?2, middle_name = ?3, last_name = ?4, suffix = ?5, \
                birth_date = ?6, parent_id = ?7, spouse = ?8, wedding_anniversary = ?9, \
                bio = ?10, favorite_memories = ?11, image_file = ?12 \
             WHERE id = ?1 RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.middle_name)
        .bind(&data.last_name)
        .bind(&data.suffix)
        .bind(&data.birth_date)
        .bind(data.parent_id)
        .bind(&data.spouse)
        .bind(&data.wedding_anniversary)
        .bind(&data.bio)
        .bind(&data.favorite_memories)
        .bind(image_file)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update member"))?
        .ok_or_else(|| AppError::not_found(format!("Member {id} not found")))
    }
}

/// Constraint violations are caller mistakes, everything else is a storage failure.
fn map_write_error(e: sqlx::Error, context: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.kind() == DbErrorKind::ForeignKeyViolation => {
            AppError::validation("Parent member does not exist")
        }
        sqlx::Error::Database(ref db_err) if db_err.kind() == DbErrorKind::NotNullViolation => {
            AppError::validation("First name and last name are required")
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}
