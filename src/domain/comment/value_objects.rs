// src/domain/comment/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MIN_TEXT_CHARS: usize = 10;
const MAX_TEXT_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentId(String);

impl CommentId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CommentId> for String {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    /// Emptiness is checked on the trimmed value, the length bounds on
    /// the value as given.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "comment text cannot be empty".into(),
            ));
        }
        let chars = value.chars().count();
        if chars < MIN_TEXT_CHARS {
            return Err(DomainError::Validation(
                "comment text must be at least 10 characters".into(),
            ));
        }
        if chars > MAX_TEXT_CHARS {
            return Err(DomainError::Validation(
                "comment text cannot exceed 500 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CommentText> for String {
    fn from(value: CommentText) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rejects_empty_before_length() {
        let err = CommentText::new("   ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: comment text cannot be empty"
        );
    }

    #[test]
    fn text_accepts_both_bounds() {
        assert!(CommentText::new("a".repeat(10)).is_ok());
        assert!(CommentText::new("a".repeat(500)).is_ok());
    }

    #[test]
    fn text_rejects_below_minimum() {
        let err = CommentText::new("a".repeat(9)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: comment text must be at least 10 characters"
        );
    }

    #[test]
    fn text_rejects_above_maximum() {
        let err = CommentText::new("a".repeat(501)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: comment text cannot exceed 500 characters"
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // eleven characters, well past the minimum in bytes either way
        assert!(CommentText::new("日本文化についての感想").is_ok());
    }

    #[test]
    fn comment_id_rejects_empty() {
        assert!(CommentId::new("").is_err());
        assert!(CommentId::new("c-1").is_ok());
    }
}
