use serde::{Deserialize, Serialize};
use validator::Validate;

use super::sanitize_field;
use crate::{error::AppError, utils::html::Sanitizer};

/// Payload for creating or editing a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BookForm {
    #[validate(length(
        min = 1,
        max = 128,
        message = "Title length must be between 1 and 128 characters."
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "Author length must be between 1 and 64 characters."
    ))]
    pub author: String,

    #[validate(range(min = 1, max = 2100))]
    pub year_published: i32,

    // Loan period category, e.g. "2days", "5days", "10days"
    #[validate(length(min = 1, max = 20))]
    pub book_type: String,
}

impl BookForm {
    /// Sanitizes every text field, then validates the cleaned values.
    pub fn prepare(self, sanitizer: &Sanitizer) -> Result<Self, AppError> {
        let form = Self {
            name: sanitize_field(sanitizer, &self.name),
            author: sanitize_field(sanitizer, &self.author),
            year_published: self.year_published,
            book_type: sanitize_field(sanitizer, &self.book_type),
        };

        if let Err(validation_errors) = form.validate() {
            tracing::warn!("Rejected book form: {}", validation_errors);
            return Err(validation_errors.into());
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BookForm {
        BookForm {
            name: "Pan Tadeusz".to_string(),
            author: "Adam Mickiewicz".to_string(),
            year_published: 1834,
            book_type: "5days".to_string(),
        }
    }

    #[test]
    fn clean_form_is_unchanged() {
        let form = sample();
        assert_eq!(form.clone().prepare(&Sanitizer::strict()).unwrap(), form);
    }

    #[test]
    fn title_tags_are_stripped() {
        let form = BookForm {
            name: "<h1>Lalka</h1>".to_string(),
            ..sample()
        };

        let prepared = form.prepare(&Sanitizer::strict()).unwrap();
        assert_eq!(prepared.name, "Lalka");
    }

    #[test]
    fn year_out_of_range_is_rejected() {
        let form = BookForm {
            year_published: 0,
            ..sample()
        };

        assert!(matches!(
            form.prepare(&Sanitizer::strict()),
            Err(AppError::BadRequest(_))
        ));
    }
}
