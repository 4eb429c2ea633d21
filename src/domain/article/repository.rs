use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::topic::TopicId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// All articles, newest first.
    async fn find_all(&self) -> DomainResult<Vec<Article>>;

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;

    /// Exact, case-sensitive slug match.
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;

    /// Articles belonging to a topic, newest first.
    async fn find_by_topic(&self, topic_id: TopicId) -> DomainResult<Vec<Article>>;
}
