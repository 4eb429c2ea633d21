use super::CommentQueryService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::comment::CommentId,
};

pub struct GetCommentByIdQuery {
    pub id: String,
}

impl CommentQueryService {
    pub async fn get_comment_by_id(
        &self,
        query: GetCommentByIdQuery,
    ) -> ApplicationResult<Option<CommentDto>> {
        let id = CommentId::new(query.id)?;
        let comment = self.repo.find_by_id(&id).await?;
        Ok(comment.map(Into::into))
    }
}
