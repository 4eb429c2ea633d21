use crate::domain::errors::DomainResult;
use crate::domain::user::entity::User;
use crate::domain::user::value_objects::{EmailAddress, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;
}
