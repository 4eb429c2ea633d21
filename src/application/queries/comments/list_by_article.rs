use super::CommentQueryService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ListCommentsByArticleQuery {
    pub article_id: String,
}

impl CommentQueryService {
    /// Comments on an article, newest first.
    pub async fn list_comments_by_article(
        &self,
        query: ListCommentsByArticleQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        let comments = self.repo.find_by_article(&article_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
