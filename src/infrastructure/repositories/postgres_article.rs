// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleName, ArticleRepository, ArticleSlug, HtmlRoute,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ArticleRow {
    pub(super) id: String,
    pub(super) slug: String,
    pub(super) name: String,
    pub(super) info: Option<String>,
    pub(super) html_route: String,
    pub(super) topic_id: i64,
    pub(super) created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            name: ArticleName::new(row.name)?,
            info: row.info,
            html_route: HtmlRoute::new(row.html_route)?,
            topic_id: TopicId::new(row.topic_id)?,
            created_at: row.created_at,
        })
    }
}

const ARTICLE_COLUMNS: &str = "id, slug, name, info, html_route, topic_id, created_at";

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC",
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1",
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        // TEXT equality in Postgres is case-sensitive, which is exactly
        // the lookup contract for slugs.
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1",
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_topic(&self, topic_id: TopicId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE topic_id = $1 ORDER BY created_at DESC",
        ))
        .bind(i64::from(topic_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
