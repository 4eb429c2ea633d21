// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::comments::CommentCommandService,
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            topics::TopicQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::ArticleRepository, comment::CommentRepository, topic::ArticleTopicRepository,
        user::UserRepository,
    },
};

/// Bundles every query and command service over a single set of
/// repositories. The presentation layer receives one of these and never
/// touches the repositories directly.
pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub topic_queries: Arc<TopicQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        topic_repo: Arc<dyn ArticleTopicRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            article_queries: Arc::new(ArticleQueryService::new(article_repo)),
            topic_queries: Arc::new(TopicQueryService::new(topic_repo)),
            comment_queries: Arc::new(CommentQueryService::new(Arc::clone(&comment_repo))),
            comment_commands: Arc::new(CommentCommandService::new(comment_repo)),
            user_queries: Arc::new(UserQueryService::new(user_repo)),
        }
    }
}
