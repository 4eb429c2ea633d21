// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_topic;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_topic::PostgresArticleTopicRepository;
pub use postgres_user::PostgresUserRepository;
