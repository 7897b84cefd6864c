//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::post::Post;
use crate::domain::repository::{OwnerDirectory, PostRepository};
use crate::domain::value_object::pagination::Pagination;
use crate::error::{PostError, PostResult};

/// PostgreSQL `foreign_key_violation`
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

const POST_COLUMNS: &str =
    "id, user_id, content, media, created_at, updated_at, deleted_at";

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                id,
                user_id,
                content,
                media,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(&post.content)
        .bind(&post.media)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE user_id = $1 AND deleted_at IS NULL \
             ORDER BY created_at DESC"
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn find_feed(&self, pagination: Pagination) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE deleted_at IS NULL \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2"
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET
                content = $2,
                media = $3,
                updated_at = $4
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.content)
        .bind(&post.media)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PostError::PostNotFound);
        }

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<()> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE posts SET deleted_at = $2, updated_at = $2 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(post_id.as_uuid())
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PostError::PostNotFound);
        }

        Ok(())
    }
}

/// The owner row vanished between the existence check and the insert
fn map_insert_error(err: sqlx::Error) -> PostError {
    let owner_missing = matches!(
        &err,
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(PG_FOREIGN_KEY_VIOLATION)
    );

    if owner_missing {
        PostError::OwnerNotFound
    } else {
        PostError::Database(err)
    }
}

// ============================================================================
// Owner Directory Implementation
// ============================================================================

impl OwnerDirectory for PgPostRepository {
    async fn owner_exists(&self, user_id: &UserId) -> PostResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    user_id: Uuid,
    content: String,
    media: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            content: self.content,
            media: self.media,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}
