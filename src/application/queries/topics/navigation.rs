use super::TopicQueryService;
use crate::application::{dto::NavigationTopicDto, error::ApplicationResult};

impl TopicQueryService {
    /// Topic/article tree for the site navigation. The projection keeps
    /// only what the menus render; see `NavigationArticleDto` for the
    /// fields that are deliberately dropped.
    pub async fn get_navigation_data(&self) -> ApplicationResult<Vec<NavigationTopicDto>> {
        let topics = self.repo.find_all_with_articles().await?;
        Ok(topics.into_iter().map(Into::into).collect())
    }
}
