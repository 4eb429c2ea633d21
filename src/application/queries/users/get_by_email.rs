use super::UserQueryService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::EmailAddress,
};

pub struct GetUserByEmailQuery {
    pub email: String,
}

impl UserQueryService {
    /// The email is validated against the same pattern the entity
    /// enforces, so a malformed address fails before any I/O.
    pub async fn get_user_by_email(
        &self,
        query: GetUserByEmailQuery,
    ) -> ApplicationResult<Option<UserDto>> {
        let email = EmailAddress::new(query.email)?;
        let user = self.repo.find_by_email(&email).await?;
        Ok(user.map(Into::into))
    }
}
