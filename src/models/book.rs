//! Book model and write payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    error::{AppError, AppResult},
    isbn,
};

/// Payload fields in the order violations are reported.
/// Keys are the Rust field names used by `validator`.
const FIELD_ORDER: [&str; 5] = ["isbn", "title", "author", "number_of_pages", "rating"];

/// Persisted book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Assigned by storage on first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Normalized ISBN-13 (digits and `X` only)
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub number_of_pages: i32,
    /// Rating between 1 and 5
    pub rating: i32,
}

impl Book {
    /// Build a not-yet-persisted book from validated fields.
    pub fn new(fields: BookFields) -> Self {
        Self {
            id: None,
            isbn: fields.isbn,
            title: fields.title,
            author: fields.author,
            number_of_pages: fields.number_of_pages,
            rating: fields.rating,
        }
    }

    /// Overwrite every writable field, keeping the id.
    pub fn apply(&mut self, fields: BookFields) {
        self.isbn = fields.isbn;
        self.title = fields.title;
        self.author = fields.author;
        self.number_of_pages = fields.number_of_pages;
        self.rating = fields.rating;
    }
}

/// Create / update book request.
///
/// Every field is optional on the wire so that a missing value is reported
/// as a violation instead of a deserialization failure. Any `id` sent in the
/// body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[validate(
        required(message = "ISBN required"),
        custom(function = "validate_isbn")
    )]
    pub isbn: Option<String>,
    #[validate(
        required(message = "Title required"),
        length(min = 1, message = "Title required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Author required"),
        length(min = 1, message = "Author required")
    )]
    pub author: Option<String>,
    #[validate(
        required(message = "Number of pages required"),
        range(min = 1, message = "Number of pages must be greater than 0")
    )]
    pub number_of_pages: Option<i32>,
    #[validate(
        required(message = "Rating required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub rating: Option<i32>,
}

/// The five writable fields of a book, all present and valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub number_of_pages: i32,
    pub rating: i32,
}

impl BookPayload {
    /// Every violated constraint as a human readable message, in field order.
    pub fn violations(&self) -> Vec<String> {
        let errors = match self.validate() {
            Ok(()) => return Vec::new(),
            Err(errors) => errors,
        };
        let field_errors = errors.field_errors();

        FIELD_ORDER
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .flat_map(|errs| errs.iter())
            .map(|err| match &err.message {
                Some(message) => message.to_string(),
                None => err.code.to_string(),
            })
            .collect()
    }

    /// Validate the payload and take its fields.
    pub fn into_fields(self) -> AppResult<BookFields> {
        let violations = self.violations();
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        match (
            self.isbn,
            self.title,
            self.author,
            self.number_of_pages,
            self.rating,
        ) {
            (Some(isbn), Some(title), Some(author), Some(number_of_pages), Some(rating)) => {
                Ok(BookFields {
                    isbn,
                    title,
                    author,
                    number_of_pages,
                    rating,
                })
            }
            _ => Err(AppError::Internal(
                "validated book payload is missing a field".to_string(),
            )),
        }
    }
}

fn validate_isbn(value: &str) -> Result<(), ValidationError> {
    if isbn::is_valid(value) {
        return Ok(());
    }
    let mut error = ValidationError::new("isbn");
    error.message = Some("invalid ISBN".into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> BookPayload {
        BookPayload {
            isbn: Some("978-1-61729-045-9".to_string()),
            title: Some("Rust in Action".to_string()),
            author: Some("Tim McNamara".to_string()),
            number_of_pages: Some(456),
            rating: Some(5),
        }
    }

    #[test]
    fn test_valid_payload_has_no_violations() {
        assert!(payload().violations().is_empty());
    }

    #[test]
    fn test_missing_fields_report_required_messages_in_order() {
        let violations = BookPayload::default().violations();
        assert_eq!(
            violations,
            vec![
                "ISBN required",
                "Title required",
                "Author required",
                "Number of pages required",
                "Rating required",
            ]
        );
    }

    #[test]
    fn test_empty_strings_are_rejected() {
        let data = BookPayload {
            title: Some(String::new()),
            author: Some(String::new()),
            ..payload()
        };
        assert_eq!(data.violations(), vec!["Title required", "Author required"]);
    }

    #[test]
    fn test_pages_lower_bound() {
        let data = BookPayload {
            number_of_pages: Some(0),
            ..payload()
        };
        assert_eq!(
            data.violations(),
            vec!["Number of pages must be greater than 0"]
        );
    }

    #[test]
    fn test_rating_range() {
        for rating in [0, 6, -1] {
            let data = BookPayload {
                rating: Some(rating),
                ..payload()
            };
            assert_eq!(data.violations(), vec!["Rating must be between 1 and 5"]);
        }
        for rating in 1..=5 {
            let data = BookPayload {
                rating: Some(rating),
                ..payload()
            };
            assert!(data.violations().is_empty());
        }
    }

    #[test]
    fn test_invalid_isbn() {
        let data = BookPayload {
            isbn: Some("123-456".to_string()),
            ..payload()
        };
        assert_eq!(data.violations(), vec!["invalid ISBN"]);
    }

    #[test]
    fn test_into_fields_rejects_with_all_violations() {
        let data = BookPayload {
            title: None,
            rating: Some(9),
            ..payload()
        };
        match data.into_fields() {
            Err(AppError::Validation(violations)) => assert_eq!(
                violations,
                vec!["Title required", "Rating must be between 1 and 5"]
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_fields_keeps_raw_isbn() {
        let fields = payload().into_fields().unwrap();
        assert_eq!(fields.isbn, "978-1-61729-045-9");
        assert_eq!(fields.number_of_pages, 456);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut book = Book::new(payload().into_fields().unwrap());
        book.id = Some(7);
        book.apply(BookFields {
            isbn: "9783161484100".to_string(),
            title: "Lord of the Rings".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            number_of_pages: 11,
            rating: 5,
        });
        assert_eq!(book.id, Some(7));
        assert_eq!(book.title, "Lord of the Rings");
        assert_eq!(book.isbn, "9783161484100");
    }

    #[test]
    fn test_book_json_shape() {
        let book = Book {
            id: Some(1),
            isbn: "9781617290459".to_string(),
            title: "A".to_string(),
            author: "X".to_string(),
            number_of_pages: 12,
            rating: 3,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "isbn": "9781617290459",
                "title": "A",
                "author": "X",
                "numberOfPages": 12,
                "rating": 3
            })
        );
    }

    #[test]
    fn test_payload_ignores_body_id() {
        let data: BookPayload = serde_json::from_value(serde_json::json!({
            "id": 42,
            "isbn": "9781617290459",
            "title": "A",
            "author": "X",
            "numberOfPages": 12,
            "rating": 3
        }))
        .unwrap();
        assert_eq!(data.number_of_pages, Some(12));
        assert!(data.violations().is_empty());
    }
}
