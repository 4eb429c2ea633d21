use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_TOPIC: &str = "articles_topic_id_fkey";
const CNT_TOPIC_NAME: &str = "article_topics_name_key";
const CNT_COMMENT_USER: &str = "comments_user_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_USER_EMAIL: &str = "users_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_TOPIC_NAME => DomainError::Conflict("topic name already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_ARTICLE_TOPIC => DomainError::NotFound("topic not found".into()),
                    CNT_COMMENT_USER => DomainError::NotFound("user not found".into()),
                    CNT_COMMENT_ARTICLE => DomainError::NotFound("article not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
