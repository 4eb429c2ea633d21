use super::TopicQueryService;
use crate::{
    application::{dto::TopicDto, error::ApplicationResult},
    domain::topic::TopicId,
};

pub struct GetTopicByIdQuery {
    pub id: i64,
}

impl TopicQueryService {
    pub async fn get_topic_by_id(
        &self,
        query: GetTopicByIdQuery,
    ) -> ApplicationResult<Option<TopicDto>> {
        let id = TopicId::new(query.id)?;
        let topic = self.repo.find_by_id(id).await?;
        Ok(topic.map(Into::into))
    }
}
