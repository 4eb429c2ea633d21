// tests/support/mocks/mod.rs
#![allow(dead_code)]

pub mod repos;
pub mod time;

pub use repos::{
    InMemoryArticleRepo, InMemoryCommentRepo, InMemoryTopicRepo, InMemoryUserRepo,
    UnreachableArticleRepo,
};
pub use time::{FixedClock, fixed_now};
