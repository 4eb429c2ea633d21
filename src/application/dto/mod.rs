pub mod articles;
pub mod comments;
pub mod navigation;
pub mod topics;
pub mod users;

pub use articles::ArticleDto;
pub use comments::CommentDto;
pub use navigation::{NavigationArticleDto, NavigationTopicDto};
pub use topics::TopicDto;
pub use users::UserDto;
