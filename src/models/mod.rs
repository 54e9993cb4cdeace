//! Data models for the library catalog

pub mod book;
pub mod date;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookDetails};
pub use loan::{BorrowedBook, BorrowedBookShort};
pub use user::User;
