use super::UserQueryService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct GetUserByIdQuery {
    pub id: String,
}

impl UserQueryService {
    pub async fn get_user_by_id(
        &self,
        query: GetUserByIdQuery,
    ) -> ApplicationResult<Option<UserDto>> {
        let id = UserId::new(query.id)?;
        let user = self.repo.find_by_id(&id).await?;
        Ok(user.map(Into::into))
    }
}
