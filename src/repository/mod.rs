//! Repository layer for book persistence

pub mod books;
pub mod memory;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;

use crate::{
    config::{DatabaseConfig, StorageBackend},
    error::AppResult,
    models::book::Book,
};

pub use books::PgBookRepository;
pub use memory::InMemoryBookRepository;

/// Storage operations the book service relies on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All stored books, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>>;

    /// Insert the book when it has no id yet (assigning one), otherwise
    /// overwrite the stored row with the same id.
    async fn save(&self, book: Book) -> AppResult<Book>;

    async fn delete(&self, book: &Book) -> AppResult<()>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Build the repository for the configured backend.
///
/// For PostgreSQL this connects the pool and runs pending migrations.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Arc<dyn BookRepository>> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, books will not survive a restart");
            Ok(Arc::new(InMemoryBookRepository::new()))
        }
        StorageBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .min_connections(config.min_connections)
                .connect(&config.url)
                .await
                .context("Failed to connect to database")?;

            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            tracing::info!("Database migrations completed");

            Ok(Arc::new(PgBookRepository::new(pool)))
        }
    }
}
