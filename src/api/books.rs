//! Catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookDetails, CreateBook},
};

use super::{IdPath, MessageResponse, Payload};

#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
}

#[derive(Serialize, ToSchema)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

#[derive(Serialize, ToSchema)]
pub struct BookDetailsResponse {
    pub book_details: BookDetails,
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = MessageResponse),
        (status = 500, description = "Invalid input or ISBN already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(book), _): Payload<CreateBook>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.catalog.create_book(book).await?;
    Ok((StatusCode::CREATED, MessageResponse::new("Book added successfully")))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = BooksResponse)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<BooksResponse>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(BooksResponse { books }))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): IdPath<i64>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(BookResponse { book }))
}

/// Get the physical details of a book
#[utoipa::path(
    get,
    path = "/books/{id}/details",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailsResponse),
        (status = 404, description = "Book or details not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_details(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): IdPath<i64>,
) -> AppResult<Json<BookDetailsResponse>> {
    let book_details = state.services.catalog.get_book_details(id).await?;
    Ok(Json(BookDetailsResponse { book_details }))
}

/// Assign or update the details of a book (POST and PUT)
#[utoipa::path(
    put,
    path = "/books/{id}/details",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = crate::models::book::BookDetailsPayload,
    responses(
        (status = 200, description = "Details saved", body = MessageResponse),
        (status = 204, description = "No NumberOfPages in payload, nothing changed"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn upsert_book_details(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): IdPath<i64>,
    WithRejection(Json(payload), _): Payload<Value>,
) -> AppResult<Response> {
    let saved = state.services.catalog.upsert_book_details(id, payload).await?;

    Ok(match saved {
        Some(_) => (StatusCode::OK, MessageResponse::new("Book details updated successfully")).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
