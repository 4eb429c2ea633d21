use std::sync::Arc;

use crate::domain::comment::CommentRepository;

pub struct CommentCommandService {
    pub(super) repo: Arc<dyn CommentRepository>,
}

impl CommentCommandService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }
}
