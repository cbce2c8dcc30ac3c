//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    isbn,
    models::book::{Book, BookFields, BookPayload},
    repository::BookRepository,
};

#[derive(Clone)]
pub struct BookService {
    repository: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i64) -> AppResult<Book> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Validate and store a new book. The ISBN is stored normalized.
    pub async fn create(&self, data: BookPayload) -> AppResult<Book> {
        let fields = normalized(data.into_fields()?);
        let book = self.repository.save(Book::new(fields)).await?;
        tracing::info!(id = ?book.id, isbn = %book.isbn, "Book created");
        Ok(book)
    }

    /// Replace every writable field of an existing book.
    ///
    /// The id in the path is authoritative; the payload cannot change it.
    pub async fn update(&self, id: i64, data: BookPayload) -> AppResult<Book> {
        let fields = normalized(data.into_fields()?);
        let mut book = self.get(id).await?;
        book.apply(fields);
        let book = self.repository.save(book).await?;
        tracing::info!(id, "Book updated");
        Ok(book)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let book = self.get(id).await?;
        self.repository.delete(&book).await?;
        tracing::info!(id, "Book deleted");
        Ok(())
    }

    /// Readiness probe for the backing store
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}

fn normalized(mut fields: BookFields) -> BookFields {
    fields.isbn = isbn::normalize(&fields.isbn);
    fields
}
