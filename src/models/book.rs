//! Book and book details models

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Book row, also its JSON projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    #[serde(rename = "BookID")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(rename = "PublishedDate")]
    pub published_date: NaiveDate,
    #[serde(rename = "Genre")]
    pub genre: String,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[serde(rename = "Title")]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,
    /// Must not belong to another book
    #[serde(rename = "ISBN")]
    #[validate(length(max = 13, message = "ISBN must be at most 13 characters"))]
    pub isbn: String,
    #[serde(rename = "PublishedDate", deserialize_with = "super::date::deserialize")]
    pub published_date: NaiveDate,
    #[serde(rename = "Genre")]
    #[validate(length(max = 50, message = "Genre must be at most 50 characters"))]
    pub genre: String,
}

/// Book details row (one per book at most)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookDetails {
    #[serde(skip)]
    pub id: i64,
    #[serde(rename = "BookID")]
    pub book_id: i64,
    #[serde(rename = "NumberOfPages")]
    pub number_of_pages: i64,
    #[serde(rename = "Publisher")]
    pub publisher: String,
    #[serde(rename = "Language")]
    pub language: String,
}

/// Book details request, accepted by both POST and PUT.
///
/// `NumberOfPages` gates the whole update: when the key is missing the
/// request does nothing. Once it is present the other fields are required.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookDetailsPayload {
    #[serde(rename = "NumberOfPages", default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub number_of_pages: Option<Option<i64>>,
    #[serde(rename = "Publisher")]
    pub publisher: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
}

/// Validated book details, ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UpsertBookDetails {
    #[validate(range(min = 1, message = "NumberOfPages must be positive"))]
    pub number_of_pages: i64,
    #[validate(length(max = 255, message = "Publisher must be at most 255 characters"))]
    pub publisher: String,
    #[validate(length(max = 50, message = "Language must be at most 50 characters"))]
    pub language: String,
}

impl BookDetailsPayload {
    /// `Ok(None)` when `NumberOfPages` was not sent at all
    pub fn into_upsert(self) -> AppResult<Option<UpsertBookDetails>> {
        let Some(number_of_pages) = self.number_of_pages else {
            return Ok(None);
        };

        let number_of_pages = number_of_pages
            .ok_or_else(|| AppError::Validation("NumberOfPages must not be null".to_string()))?;
        let publisher = self
            .publisher
            .ok_or_else(|| AppError::Validation("Missing field 'Publisher'".to_string()))?;
        let language = self
            .language
            .ok_or_else(|| AppError::Validation("Missing field 'Language'".to_string()))?;

        Ok(Some(UpsertBookDetails {
            number_of_pages,
            publisher,
            language,
        }))
    }
}

/// Distinguishes a key sent as `null` (`Some(None)`) from a missing key (`None`)
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> BookDetailsPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_details_without_page_count_is_noop() {
        let details = payload(r#"{"Publisher": "Gallimard", "Language": "fr"}"#);
        assert_eq!(details.into_upsert().unwrap(), None);
    }

    #[test]
    fn test_details_with_page_count() {
        let details = payload(r#"{"NumberOfPages": 320, "Publisher": "Gallimard", "Language": "fr"}"#);
        assert_eq!(
            details.into_upsert().unwrap(),
            Some(UpsertBookDetails {
                number_of_pages: 320,
                publisher: "Gallimard".to_string(),
                language: "fr".to_string(),
            })
        );
    }

    #[test]
    fn test_details_null_page_count_is_rejected() {
        let details = payload(r#"{"NumberOfPages": null, "Publisher": "Gallimard", "Language": "fr"}"#);
        assert!(matches!(details.into_upsert(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_details_page_count_requires_other_fields() {
        let details = payload(r#"{"NumberOfPages": 320, "Language": "fr"}"#);
        assert!(matches!(details.into_upsert(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_details_page_count_must_be_positive() {
        let details = UpsertBookDetails {
            number_of_pages: 0,
            publisher: "Gallimard".to_string(),
            language: "fr".to_string(),
        };
        assert!(details.validate().is_err());
    }

    #[test]
    fn test_isbn_longer_than_column_is_invalid() {
        let book: CreateBook = serde_json::from_str(
            r#"{"Title": "Dune", "ISBN": "97804411729999", "PublishedDate": "1965-08-01", "Genre": "SF"}"#,
        )
        .unwrap();
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_book_projection_keys() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            isbn: "9780441172719".to_string(),
            published_date: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
            genre: "SF".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            serde_json::json!({
                "BookID": 1,
                "Title": "Dune",
                "ISBN": "9780441172719",
                "PublishedDate": "1965-08-01",
                "Genre": "SF"
            })
        );
    }
}
