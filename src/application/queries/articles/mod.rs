mod get_by_id;
mod get_by_slug;
mod list;
mod list_by_topic;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list_by_topic::ListArticlesByTopicQuery;
pub use service::ArticleQueryService;
