pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ArticleTopic, TopicWithArticles};
pub use repository::ArticleTopicRepository;
pub use value_objects::{TopicId, TopicName};
