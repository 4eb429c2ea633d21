use super::TopicQueryService;
use crate::application::{dto::TopicDto, error::ApplicationResult};

impl TopicQueryService {
    /// All topics, ordered by id ascending.
    pub async fn list_topics(&self) -> ApplicationResult<Vec<TopicDto>> {
        let topics = self.repo.find_all().await?;
        Ok(topics.into_iter().map(Into::into).collect())
    }
}
