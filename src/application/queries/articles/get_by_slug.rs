use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Slug matching is exact and case-sensitive; `None` when absent.
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let slug = ArticleSlug::new(query.slug)?;
        let article = self.repo.find_by_slug(&slug).await?;
        Ok(article.map(Into::into))
    }
}
