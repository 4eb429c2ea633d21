use crate::domain::errors::DomainResult;
use crate::domain::topic::entity::{ArticleTopic, TopicWithArticles};
use crate::domain::topic::value_objects::TopicId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleTopicRepository: Send + Sync {
    /// All topics, ordered by id ascending.
    async fn find_all(&self) -> DomainResult<Vec<ArticleTopic>>;

    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<ArticleTopic>>;

    /// Every topic (including topics without articles) paired with its
    /// articles, topics ordered by id ascending.
    async fn find_all_with_articles(&self) -> DomainResult<Vec<TopicWithArticles>>;
}
