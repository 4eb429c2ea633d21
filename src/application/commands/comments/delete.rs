use super::CommentCommandService;
use crate::{application::error::ApplicationResult, domain::comment::CommentId};

pub struct DeleteCommentCommand {
    pub id: String,
}

impl CommentCommandService {
    /// Deleting a missing comment is an error, unlike the `None` result
    /// of the single-record lookups.
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::new(command.id)?;
        self.repo.delete(&id).await?;
        Ok(())
    }
}
