use crate::domain::topic::ArticleTopic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDto {
    pub id: i64,
    pub name: String,
}

impl From<ArticleTopic> for TopicDto {
    fn from(topic: ArticleTopic) -> Self {
        Self {
            id: topic.id.into(),
            name: topic.name.into(),
        }
    }
}
