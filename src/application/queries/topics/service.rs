use std::sync::Arc;

use crate::domain::topic::ArticleTopicRepository;

pub struct TopicQueryService {
    pub(super) repo: Arc<dyn ArticleTopicRepository>,
}

impl TopicQueryService {
    pub fn new(repo: Arc<dyn ArticleTopicRepository>) -> Self {
        Self { repo }
    }
}
