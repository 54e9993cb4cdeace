//! Borrowed book records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Borrowed book row. `return_date` is `None` while the loan is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowedBook {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "BookID")]
    pub book_id: i64,
    #[serde(rename = "BorrowDate")]
    pub borrow_date: NaiveDate,
    #[serde(rename = "ReturnDate")]
    pub return_date: Option<NaiveDate>,
}

/// Open loan as listed by `/borrowed-books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BorrowedBookShort {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "BookID")]
    pub book_id: i64,
    #[serde(rename = "BorrowDate")]
    pub borrow_date: NaiveDate,
}

impl From<BorrowedBook> for BorrowedBookShort {
    fn from(loan: BorrowedBook) -> Self {
        Self {
            user_id: loan.user_id,
            book_id: loan.book_id,
            borrow_date: loan.borrow_date,
        }
    }
}

/// Borrow request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLoan {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "BookID")]
    pub book_id: i64,
    #[serde(rename = "BorrowDate", deserialize_with = "super::date::deserialize")]
    pub borrow_date: NaiveDate,
}

/// Return request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReturnLoan {
    #[serde(rename = "ReturnDate", deserialize_with = "super::date::deserialize")]
    pub return_date: NaiveDate,
}
