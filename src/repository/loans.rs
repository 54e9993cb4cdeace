//! Borrowed books repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{BorrowedBook, CreateLoan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open loans, oldest first
    pub async fn list_open(&self) -> AppResult<Vec<BorrowedBook>> {
        let loans = sqlx::query_as::<_, BorrowedBook>(
            r#"
            SELECT user_id, book_id, borrow_date, return_date
            FROM borrowed_books
            WHERE return_date IS NULL
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(loans)
    }

    /// Record a new open loan.
    ///
    /// The (user, book) pair is the primary key, so a pair that was borrowed
    /// once can never be borrowed again, even after it was returned.
    pub async fn create(&self, loan: &CreateLoan) -> AppResult<BorrowedBook> {
        let created = sqlx::query_as::<_, BorrowedBook>(
            r#"
            INSERT INTO borrowed_books (user_id, book_id, borrow_date, return_date)
            VALUES ($1, $2, $3, NULL)
            RETURNING user_id, book_id, borrow_date, return_date
            "#,
        )
        .bind(loan.user_id)
        .bind(loan.book_id)
        .bind(loan.borrow_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Get the open loan of `book_id` by `user_id`
    pub async fn get_open(&self, user_id: i64, book_id: i64) -> AppResult<BorrowedBook> {
        sqlx::query_as::<_, BorrowedBook>(
            r#"
            SELECT user_id, book_id, borrow_date, return_date
            FROM borrowed_books
            WHERE user_id = $1 AND book_id = $2 AND return_date IS NULL
            "#,
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| no_open_loan(user_id, book_id))
    }

    /// Close the open loan of `book_id` by `user_id`
    pub async fn close(
        &self,
        user_id: i64,
        book_id: i64,
        return_date: NaiveDate,
    ) -> AppResult<BorrowedBook> {
        sqlx::query_as::<_, BorrowedBook>(
            r#"
            UPDATE borrowed_books
            SET return_date = $1
            WHERE user_id = $2 AND book_id = $3 AND return_date IS NULL
            RETURNING user_id, book_id, borrow_date, return_date
            "#,
        )
        .bind(return_date)
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| no_open_loan(user_id, book_id))
    }
}

fn no_open_loan(user_id: i64, book_id: i64) -> AppError {
    AppError::NotFound(format!("No open loan of book {} by user {}", book_id, user_id))
}
