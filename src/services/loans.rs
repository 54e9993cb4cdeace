//! Loan management service

use serde_json::Value;

use crate::{
    error::AppResult,
    models::loan::{BorrowedBook, BorrowedBookShort, CreateLoan, ReturnLoan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Books currently out on loan
    pub async fn list_open(&self) -> AppResult<Vec<BorrowedBookShort>> {
        let loans = self.repository.loans.list_open().await?;
        Ok(loans.into_iter().map(BorrowedBookShort::from).collect())
    }

    /// Borrow a book. Unknown users or books are rejected by the store.
    pub async fn borrow(&self, loan: CreateLoan) -> AppResult<BorrowedBook> {
        let created = self.repository.loans.create(&loan).await?;
        tracing::info!("User {} borrowed book {}", created.user_id, created.book_id);
        Ok(created)
    }

    /// Return a borrowed book.
    /// An unknown or already closed loan answers NotFound before the payload is decoded.
    pub async fn return_book(
        &self,
        user_id: i64,
        book_id: i64,
        payload: Value,
    ) -> AppResult<BorrowedBook> {
        self.repository.loans.get_open(user_id, book_id).await?;

        let request: ReturnLoan = serde_json::from_value(payload)?;
        let returned = self
            .repository
            .loans
            .close(user_id, book_id, request.return_date)
            .await?;
        tracing::info!("User {} returned book {}", user_id, book_id);
        Ok(returned)
    }
}
