use crate::domain::article::Article;
use crate::domain::topic::TopicWithArticles;
use serde::{Deserialize, Serialize};

/// Navigation projection of an article. The shape is fixed on purpose:
/// `html_route`, `topic_id` and `created_at` must not cross the
/// presentation boundary, so the fields are listed one by one instead of
/// reusing `ArticleDto`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationArticleDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub info: Option<String>,
}

impl From<Article> for NavigationArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            name: article.name.into(),
            slug: article.slug.into(),
            info: article.info,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationTopicDto {
    pub id: i64,
    pub name: String,
    pub articles: Vec<NavigationArticleDto>,
}

impl From<TopicWithArticles> for NavigationTopicDto {
    fn from(pair: TopicWithArticles) -> Self {
        Self {
            id: pair.topic.id.into(),
            name: pair.topic.name.into(),
            articles: pair.articles.into_iter().map(Into::into).collect(),
        }
    }
}
