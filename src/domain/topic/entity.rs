// src/domain/topic/entity.rs
use crate::domain::article::Article;
use crate::domain::topic::value_objects::{TopicId, TopicName};

/// Category grouping for articles.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleTopic {
    pub id: TopicId,
    pub name: TopicName,
}

/// A topic paired with every article filed under it. Topics without
/// articles carry an empty list.
#[derive(Debug, Clone)]
pub struct TopicWithArticles {
    pub topic: ArticleTopic,
    pub articles: Vec<Article>,
}
