// src/bootstrap.rs
//! Process lifecycle: build the pool and services once at startup, close
//! the pool on shutdown. The embedding binary owns the signal loop; the
//! helpers here mirror how it is expected to wire things together.
use std::sync::Arc;

use crate::application::{ports::time::Clock, services::ApplicationServices};
use crate::config::AppConfig;
use crate::domain::{
    article::ArticleRepository, comment::CommentRepository, topic::ArticleTopicRepository,
    user::UserRepository,
};
use crate::infrastructure::{
    database,
    repositories::{
        PostgresArticleRepository, PostgresArticleTopicRepository, PostgresCommentRepository,
        PostgresUserRepository,
    },
    time::SystemClock,
};
use anyhow::Result;
use sqlx::PgPool;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct Runtime {
    pool: PgPool,
    services: Arc<ApplicationServices>,
}

impl Runtime {
    /// Connect, migrate and wire the repositories into application
    /// services. Fails fast on an unreachable database or a broken
    /// migration set.
    pub async fn init(config: &AppConfig) -> Result<Self> {
        let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
        database::run_migrations(&pool).await?;
        tracing::info!(
            max_connections = config.max_connections(),
            "database pool ready"
        );

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let article_repo: Arc<dyn ArticleRepository> =
            Arc::new(PostgresArticleRepository::new(pool.clone()));
        let topic_repo: Arc<dyn ArticleTopicRepository> =
            Arc::new(PostgresArticleTopicRepository::new(pool.clone()));
        let comment_repo: Arc<dyn CommentRepository> = Arc::new(PostgresCommentRepository::new(
            pool.clone(),
            Arc::clone(&clock),
        ));
        let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));

        let services = Arc::new(ApplicationServices::new(
            article_repo,
            topic_repo,
            comment_repo,
            user_repo,
        ));

        Ok(Self { pool, services })
    }

    pub fn services(&self) -> Arc<ApplicationServices> {
        Arc::clone(&self.services)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Drain and close the pool. Call once, after the last request has
    /// been served.
    pub async fn shutdown(self) {
        tracing::info!("closing database pool");
        self.pool.close().await;
    }
}

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

/// Resolves when the process receives SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
