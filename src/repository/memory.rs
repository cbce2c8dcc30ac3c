//! In-memory book repository, used by tests and the `memory` backend

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookRepository;
use crate::{error::AppResult, models::book::Book};

#[derive(Default)]
struct Store {
    last_id: i64,
    books: BTreeMap<i64, Book>,
}

#[derive(Default)]
pub struct InMemoryBookRepository {
    store: RwLock<Store>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let store = self.store.read().await;
        Ok(store.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let store = self.store.read().await;
        Ok(store.books.get(&id).cloned())
    }

    async fn save(&self, mut book: Book) -> AppResult<Book> {
        let mut store = self.store.write().await;
        let id = match book.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                store.last_id += 1;
                store.last_id
            }
        };
        book.id = Some(id);
        store.books.insert(id, book.clone());
        Ok(book)
    }

    async fn delete(&self, book: &Book) -> AppResult<()> {
        if let Some(id) = book.id {
            self.store.write().await.books.remove(&id);
        }
        Ok(())
    }
}
