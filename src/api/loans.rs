//! Borrowing endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{BorrowedBookShort, CreateLoan},
};

use super::{IdPath, MessageResponse, Payload};

#[derive(Serialize, ToSchema)]
pub struct BorrowedBooksResponse {
    pub borrowed_books: Vec<BorrowedBookShort>,
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Book borrowed", body = MessageResponse),
        (status = 500, description = "Unknown user or book, or pair already borrowed", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(loan), _): Payload<CreateLoan>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.loans.borrow(loan).await?;
    Ok((StatusCode::CREATED, MessageResponse::new("Book borrowed successfully")))
}

/// Return a borrowed book
#[utoipa::path(
    put,
    path = "/return/{user_id}/{book_id}",
    tag = "loans",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    request_body = crate::models::loan::ReturnLoan,
    responses(
        (status = 200, description = "Book returned", body = MessageResponse),
        (status = 404, description = "No open loan for this user and book", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    WithRejection(Path((user_id, book_id)), _): IdPath<(i64, i64)>,
    WithRejection(Json(payload), _): Payload<Value>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .loans
        .return_book(user_id, book_id, payload)
        .await?;
    Ok(MessageResponse::new("Book returned successfully"))
}

/// List books currently on loan
#[utoipa::path(
    get,
    path = "/borrowed-books",
    tag = "loans",
    responses(
        (status = 200, description = "Open loans", body = BorrowedBooksResponse)
    )
)]
pub async fn list_borrowed_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BorrowedBooksResponse>> {
    let borrowed_books = state.services.loans.list_open().await?;
    Ok(Json(BorrowedBooksResponse { borrowed_books }))
}
