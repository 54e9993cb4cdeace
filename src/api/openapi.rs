//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "Library catalog, membership and borrowing REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::create_user,
        users::list_users,
        users::get_user,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::get_book_details,
        books::upsert_book_details,
        // Loans
        loans::borrow_book,
        loans::return_book,
        loans::list_borrowed_books,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            users::UserResponse,
            users::UsersResponse,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::BookDetails,
            crate::models::book::BookDetailsPayload,
            books::BookResponse,
            books::BooksResponse,
            books::BookDetailsResponse,
            // Loans
            crate::models::loan::BorrowedBookShort,
            crate::models::loan::CreateLoan,
            crate::models::loan::ReturnLoan,
            loans::BorrowedBooksResponse,
            // Shared
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "Library members"),
        (name = "books", description = "Catalog and book details"),
        (name = "loans", description = "Borrowing and returns")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/users",
            "/users/{id}",
            "/books",
            "/books/{id}",
            "/books/{id}/details",
            "/borrow",
            "/return/{user_id}/{book_id}",
            "/borrowed-books",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
