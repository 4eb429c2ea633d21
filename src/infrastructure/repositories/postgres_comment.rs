// src/infrastructure/repositories/postgres_comment.rs
use std::sync::Arc;

use super::map_sqlx;
use crate::application::ports::time::Clock;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentId, CommentRepository, CommentText, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Comment ids are minted client-side (uuid v4), matching the string ids
/// the rest of the store uses; the creation timestamp comes from the
/// injected clock so it stays deterministic under test.
pub struct PostgresCommentRepository {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: String,
    text_comment: String,
    user_id: String,
    article_id: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            text: CommentText::new(row.text_comment)?,
            user_id: UserId::new(row.user_id)?,
            article_id: ArticleId::new(row.article_id)?,
            created_at: row.created_at,
        })
    }
}

const COMMENT_COLUMNS: &str = "id, text_comment, user_id, article_id, created_at";

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_article(&self, article_id: &ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = $1 ORDER BY created_at DESC",
        ))
        .bind(article_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn find_by_id(&self, id: &CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1",
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn create(&self, new_comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            text,
            user_id,
            article_id,
        } = new_comment;

        let id = Uuid::new_v4().to_string();
        let created_at = self.clock.now();

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (id, text_comment, user_id, article_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COMMENT_COLUMNS}",
        ))
        .bind(&id)
        .bind(text.as_str())
        .bind(user_id.as_str())
        .bind(article_id.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: &CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
