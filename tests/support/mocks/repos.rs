// tests/support/mocks/repos.rs
use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use chrono::Duration;

use senda_core::domain::article::{Article, ArticleId, ArticleRepository, ArticleSlug};
use senda_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use senda_core::domain::errors::{DomainError, DomainResult};
use senda_core::domain::topic::{
    ArticleTopic, ArticleTopicRepository, TopicId, TopicWithArticles,
};
use senda_core::domain::user::{EmailAddress, User, UserId, UserRepository};

use super::time::fixed_now;

/* -------------------------------- ArticleRepository -------------------------------- */

/// In-memory article store. Insertion order is deliberately not the
/// returned order: listings sort by created_at descending, like the SQL
/// the production repository runs.
pub struct InMemoryArticleRepo {
    articles: Vec<Article>,
}

impl InMemoryArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    fn newest_first(mut articles: Vec<Article>) -> Vec<Article> {
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        articles
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(Self::newest_first(self.articles.clone()))
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.iter().find(|a| &a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        // Byte equality: "PASADO" does not match "pasado".
        Ok(self.articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn find_by_topic(&self, topic_id: TopicId) -> DomainResult<Vec<Article>> {
        let matching = self
            .articles
            .iter()
            .filter(|a| a.topic_id == topic_id)
            .cloned()
            .collect();
        Ok(Self::newest_first(matching))
    }
}

/// Fails every call. Used to prove input validation happens before the
/// repository is touched: a validation error out of a service backed by
/// this repo cannot have come from I/O.
pub struct UnreachableArticleRepo;

#[async_trait]
impl ArticleRepository for UnreachableArticleRepo {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("repository touched".into()))
    }

    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("repository touched".into()))
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("repository touched".into()))
    }

    async fn find_by_topic(&self, _topic_id: TopicId) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("repository touched".into()))
    }
}

/* -------------------------------- ArticleTopicRepository -------------------------------- */

pub struct InMemoryTopicRepo {
    topics: Vec<ArticleTopic>,
    articles: Vec<Article>,
}

impl InMemoryTopicRepo {
    pub fn new(topics: Vec<ArticleTopic>, articles: Vec<Article>) -> Self {
        Self { topics, articles }
    }

    fn by_id_ascending(&self) -> Vec<ArticleTopic> {
        let mut topics = self.topics.clone();
        topics.sort_by_key(|t| i64::from(t.id));
        topics
    }
}

#[async_trait]
impl ArticleTopicRepository for InMemoryTopicRepo {
    async fn find_all(&self) -> DomainResult<Vec<ArticleTopic>> {
        Ok(self.by_id_ascending())
    }

    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<ArticleTopic>> {
        Ok(self.topics.iter().find(|t| t.id == id).cloned())
    }

    async fn find_all_with_articles(&self) -> DomainResult<Vec<TopicWithArticles>> {
        Ok(self
            .by_id_ascending()
            .into_iter()
            .map(|topic| {
                let mut articles: Vec<Article> = self
                    .articles
                    .iter()
                    .filter(|a| a.topic_id == topic.id)
                    .cloned()
                    .collect();
                articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                TopicWithArticles { topic, articles }
            })
            .collect())
    }
}

/* -------------------------------- CommentRepository -------------------------------- */

/// In-memory comment store with the same id/timestamp generation duties
/// as the Postgres implementation. Generated timestamps advance one
/// second per insert so ordering stays observable.
pub struct InMemoryCommentRepo {
    comments: Mutex<Vec<Comment>>,
    sequence: AtomicU64,
}

impl InMemoryCommentRepo {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments: Mutex::new(comments),
            sequence: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn find_by_article(&self, article_id: &ArticleId) -> DomainResult<Vec<Comment>> {
        let comments = self.comments.lock().unwrap();
        let mut matching: Vec<Comment> = comments
            .iter()
            .filter(|c| &c.article_id == article_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn find_by_id(&self, id: &CommentId) -> DomainResult<Option<Comment>> {
        let comments = self.comments.lock().unwrap();
        Ok(comments.iter().find(|c| &c.id == id).cloned())
    }

    async fn create(&self, new_comment: NewComment) -> DomainResult<Comment> {
        let n = self.sequence.fetch_add(1, Ordering::SeqCst);
        let comment = Comment {
            id: CommentId::new(format!("generated-{n}"))?,
            text: new_comment.text,
            user_id: new_comment.user_id,
            article_id: new_comment.article_id,
            created_at: fixed_now() + Duration::seconds(n as i64),
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: &CommentId) -> DomainResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| &c.id != id);
        if comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

/* -------------------------------- UserRepository -------------------------------- */

pub struct InMemoryUserRepo {
    users: Vec<User>,
}

impl InMemoryUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        Ok(self.users.iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        Ok(self.users.iter().find(|u| &u.email == email).cloned())
    }
}
