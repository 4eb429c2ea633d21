use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub info: Option<String>,
    pub html_route: String,
    pub topic_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            slug: article.slug.into(),
            name: article.name.into(),
            info: article.info,
            html_route: article.html_route.into(),
            topic_id: article.topic_id.into(),
            created_at: article.created_at,
        }
    }
}
