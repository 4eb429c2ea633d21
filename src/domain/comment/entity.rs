// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentId, CommentText};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub text: CommentText,
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}

/// Comment payload as supplied by a caller; id and created_at are
/// assigned by the repository on insert.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: CommentText,
    pub user_id: UserId,
    pub article_id: ArticleId,
}
