// src/domain/user/entity.rs
use crate::domain::user::value_objects::{EmailAddress, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub username: Username,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
