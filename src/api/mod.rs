//! API handlers for the library REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod users;

use axum::{
    extract::Path,
    routing::{get, post, put},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{error::AppError, AppState};

/// JSON body extractor whose failures surface as [`AppError::Validation`]
pub type Payload<T> = WithRejection<Json<T>, AppError>;

/// Path extractor; ids that do not parse answer 404 like unknown ids
pub type IdPath<T> = WithRejection<Path<T>, AppError>;

/// Confirmation returned by write endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book))
        .route(
            "/books/:id/details",
            get(books::get_book_details)
                .post(books::upsert_book_details)
                .put(books::upsert_book_details),
        )
        // Loans
        .route("/borrow", post(loans::borrow_book))
        .route("/return/:user_id/:book_id", put(loans::return_book))
        .route("/borrowed-books", get(loans::list_borrowed_books))
        .fallback(route_not_found)
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("The requested URL was not found on the server".to_string())
}
