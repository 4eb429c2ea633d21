mod get_by_email;
mod get_by_id;
mod service;

pub use get_by_email::GetUserByEmailQuery;
pub use get_by_id::GetUserByIdQuery;
pub use service::UserQueryService;
