use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub article_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            text: comment.text.into(),
            user_id: comment.user_id.into(),
            article_id: comment.article_id.into(),
            created_at: comment.created_at,
        }
    }
}
