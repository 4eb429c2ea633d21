use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    /// `None` when no article carries the id. An empty or whitespace id
    /// is rejected before the repository is consulted.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let id = ArticleId::new(query.id)?;
        let article = self.repo.find_by_id(&id).await?;
        Ok(article.map(Into::into))
    }
}
