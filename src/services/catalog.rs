//! Catalog management service

use serde_json::Value;
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookDetails, BookDetailsPayload, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Add a book to the catalog
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;

        let created = self.repository.books.create(&book).await?;
        tracing::info!("Created book id={} isbn={}", created.id, created.isbn);
        Ok(created)
    }

    /// Get the details of an existing book
    pub async fn get_book_details(&self, book_id: i64) -> AppResult<BookDetails> {
        self.repository.books.get_by_id(book_id).await?;
        self.repository.books.get_details(book_id).await
    }

    /// Assign or replace the details of a book.
    ///
    /// The book is looked up before the payload is decoded, so an unknown
    /// book answers NotFound whatever the body holds. Returns `None` without
    /// touching the store when the payload carries no `NumberOfPages`.
    pub async fn upsert_book_details(
        &self,
        book_id: i64,
        payload: Value,
    ) -> AppResult<Option<BookDetails>> {
        // Verify book exists
        self.repository.books.get_by_id(book_id).await?;

        let payload: BookDetailsPayload = serde_json::from_value(payload)?;
        let Some(details) = payload.into_upsert()? else {
            tracing::debug!("Book {} details payload has no NumberOfPages, skipping", book_id);
            return Ok(None);
        };
        details.validate()?;

        let saved = self.repository.books.upsert_details(book_id, &details).await?;
        tracing::info!("Saved details id={} for book id={}", saved.id, book_id);
        Ok(Some(saved))
    }
}
