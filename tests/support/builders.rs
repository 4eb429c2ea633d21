// tests/support/builders.rs
use chrono::{DateTime, Utc};

use senda_core::domain::article::{Article, ArticleId, ArticleName, ArticleSlug, HtmlRoute};
use senda_core::domain::comment::{Comment, CommentId, CommentText};
use senda_core::domain::topic::{ArticleTopic, TopicId, TopicName};
use senda_core::domain::user::{EmailAddress, User, UserId, Username};

use super::mocks::time::fixed_now;

pub fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("invalid RFC3339 timestamp in test")
        .with_timezone(&Utc)
}

pub struct ArticleBuilder {
    id: String,
    slug: String,
    name: String,
    info: Option<String>,
    html_route: String,
    topic_id: i64,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: "a-1".into(),
            slug: "pasado".into(),
            name: "El pasado de Japón".into(),
            info: None,
            html_route: "/articulos/pasado.html".into(),
            topic_id: 1,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn topic_id(mut self, topic_id: i64) -> Self {
        self.topic_id = topic_id;
        self
    }

    pub fn created_at(mut self, rfc3339: &str) -> Self {
        self.created_at = ts(rfc3339);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            name: ArticleName::new(self.name).unwrap(),
            info: self.info,
            html_route: HtmlRoute::new(self.html_route).unwrap(),
            topic_id: TopicId::new(self.topic_id).unwrap(),
            created_at: self.created_at,
        }
    }
}

pub fn topic(id: i64, name: &str) -> ArticleTopic {
    ArticleTopic {
        id: TopicId::new(id).unwrap(),
        name: TopicName::new(name).unwrap(),
    }
}

pub fn user(id: &str, email: &str, username: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        email: EmailAddress::new(email).unwrap(),
        username: Username::new(username).unwrap(),
        is_active: true,
        created_at: fixed_now(),
    }
}

pub fn comment(id: &str, text: &str, user_id: &str, article_id: &str, at: &str) -> Comment {
    Comment {
        id: CommentId::new(id).unwrap(),
        text: CommentText::new(text).unwrap(),
        user_id: UserId::new(user_id).unwrap(),
        article_id: ArticleId::new(article_id).unwrap(),
        created_at: ts(at),
    }
}
