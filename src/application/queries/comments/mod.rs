mod get_by_id;
mod list_by_article;
mod service;

pub use get_by_id::GetCommentByIdQuery;
pub use list_by_article::ListCommentsByArticleQuery;
pub use service::CommentQueryService;
