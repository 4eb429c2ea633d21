// src/infrastructure/repositories/postgres_topic.rs
use std::collections::HashMap;

use super::map_sqlx;
use super::postgres_article::ArticleRow;
use crate::domain::article::Article;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::{
    ArticleTopic, ArticleTopicRepository, TopicId, TopicName, TopicWithArticles,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleTopicRepository {
    pool: PgPool,
}

impl PostgresArticleTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TopicRow {
    id: i64,
    name: String,
}

impl TryFrom<TopicRow> for ArticleTopic {
    type Error = DomainError;

    fn try_from(row: TopicRow) -> Result<Self, Self::Error> {
        Ok(ArticleTopic {
            id: TopicId::new(row.id)?,
            name: TopicName::new(row.name)?,
        })
    }
}

#[async_trait]
impl ArticleTopicRepository for PostgresArticleTopicRepository {
    async fn find_all(&self) -> DomainResult<Vec<ArticleTopic>> {
        let rows =
            sqlx::query_as::<_, TopicRow>("SELECT id, name FROM article_topics ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleTopic::try_from).collect()
    }

    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<ArticleTopic>> {
        let row = sqlx::query_as::<_, TopicRow>("SELECT id, name FROM article_topics WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleTopic::try_from).transpose()
    }

    async fn find_all_with_articles(&self) -> DomainResult<Vec<TopicWithArticles>> {
        // Two ordered queries, grouped in memory. Ordering of both the
        // topics and the per-topic article lists comes from SQL.
        let topics = self.find_all().await?;

        let article_rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, slug, name, info, html_route, topic_id, created_at
             FROM articles ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_topic: HashMap<i64, Vec<Article>> = HashMap::new();
        for row in article_rows {
            let article = Article::try_from(row)?;
            by_topic
                .entry(i64::from(article.topic_id))
                .or_default()
                .push(article);
        }

        Ok(topics
            .into_iter()
            .map(|topic| {
                let articles = by_topic.remove(&i64::from(topic.id)).unwrap_or_default();
                TopicWithArticles { topic, articles }
            })
            .collect())
    }
}
