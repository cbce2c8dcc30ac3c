//! PostgreSQL book repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookRepository;
use crate::{error::AppResult, models::book::Book};

#[derive(Clone)]
pub struct PgBookRepository {
    pool: Pool<Postgres>,
}

impl PgBookRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, book: Book) -> AppResult<Book> {
        let row = match book.id {
            None => {
                sqlx::query_as::<_, Book>(
                    r#"
                    INSERT INTO books (isbn, title, author, number_of_pages, rating)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING *
                    "#,
                )
                .bind(&book.isbn)
                .bind(&book.title)
                .bind(&book.author)
                .bind(book.number_of_pages)
                .bind(book.rating)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Book>(
                    r#"
                    INSERT INTO books (id, isbn, title, author, number_of_pages, rating)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ON CONFLICT (id) DO UPDATE SET
                        isbn = EXCLUDED.isbn,
                        title = EXCLUDED.title,
                        author = EXCLUDED.author,
                        number_of_pages = EXCLUDED.number_of_pages,
                        rating = EXCLUDED.rating
                    RETURNING *
                    "#,
                )
                .bind(id)
                .bind(&book.isbn)
                .bind(&book.title)
                .bind(&book.author)
                .bind(book.number_of_pages)
                .bind(book.rating)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(row)
    }

    async fn delete(&self, book: &Book) -> AppResult<()> {
        let Some(id) = book.id else {
            return Ok(());
        };
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
