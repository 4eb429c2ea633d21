// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleName, ArticleSlug, HtmlRoute};
use crate::domain::topic::TopicId;
use chrono::{DateTime, Utc};

/// A published article. Constructed only from already-validated value
/// objects; there are no mutators, replacing a field means building a
/// new instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub name: ArticleName,
    pub info: Option<String>,
    pub html_route: HtmlRoute,
    pub topic_id: TopicId,
    pub created_at: DateTime<Utc>,
}
