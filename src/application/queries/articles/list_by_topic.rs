use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::topic::TopicId,
};

pub struct ListArticlesByTopicQuery {
    pub topic_id: i64,
}

impl ArticleQueryService {
    /// Articles filed under the topic, newest first. A non-positive
    /// topic id is rejected before any I/O.
    pub async fn list_articles_by_topic(
        &self,
        query: ListArticlesByTopicQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let topic_id = TopicId::new(query.topic_id)?;
        let articles = self.repo.find_by_topic(topic_id).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
