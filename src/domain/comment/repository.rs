use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments on an article, newest first.
    async fn find_by_article(&self, article_id: &ArticleId) -> DomainResult<Vec<Comment>>;

    async fn find_by_id(&self, id: &CommentId) -> DomainResult<Option<Comment>>;

    /// Persists the comment and returns it with its generated id and
    /// creation timestamp.
    async fn create(&self, new_comment: NewComment) -> DomainResult<Comment>;

    /// Removes a comment; `NotFound` when no such comment exists.
    async fn delete(&self, id: &CommentId) -> DomainResult<()>;
}
