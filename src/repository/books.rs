//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDetails, CreateBook, UpsertBookDetails},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books in creation order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a book. A duplicate ISBN fails with a constraint violation.
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, isbn, published_date, genre)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.isbn)
        .bind(book.published_date)
        .bind(&book.genre)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Get the details attached to a book
    pub async fn get_details(&self, book_id: i64) -> AppResult<BookDetails> {
        sqlx::query_as::<_, BookDetails>("SELECT * FROM book_details WHERE book_id = $1")
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No details for book {}", book_id)))
    }

    /// Insert the details of a book, or overwrite them in place if the book already has some
    pub async fn upsert_details(&self, book_id: i64, details: &UpsertBookDetails) -> AppResult<BookDetails> {
        let row = sqlx::query_as::<_, BookDetails>(
            r#"
            INSERT INTO book_details (book_id, number_of_pages, publisher, language)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (book_id) DO UPDATE SET
                number_of_pages = excluded.number_of_pages,
                publisher = excluded.publisher,
                language = excluded.language
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(details.number_of_pages)
        .bind(&details.publisher)
        .bind(&details.language)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
