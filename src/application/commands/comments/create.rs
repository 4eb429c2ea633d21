use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{
        article::ArticleId,
        comment::{CommentText, NewComment},
        user::UserId,
    },
};

pub struct CreateCommentCommand {
    pub text: String,
    pub user_id: String,
    pub article_id: String,
}

impl CommentCommandService {
    /// Validates the payload through the value objects, persists it and
    /// returns the stored comment with its generated id and timestamp.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let new_comment = NewComment {
            text: CommentText::new(command.text)?,
            user_id: UserId::new(command.user_id)?,
            article_id: ArticleId::new(command.article_id)?,
        };
        let comment = self.repo.create(new_comment).await?;
        Ok(comment.into())
    }
}
