use serde::{Deserialize, Serialize};
use validator::Validate;

use super::sanitize_field;
use crate::{error::AppError, utils::html::Sanitizer};

/// Payload for creating or editing a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerForm {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Name length must be between 1 and 64 characters."
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 64,
        message = "City length must be between 1 and 64 characters."
    ))]
    pub city: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120."))]
    pub age: u32,
}

impl CustomerForm {
    /// Sanitizes every text field, then validates the cleaned values.
    pub fn prepare(self, sanitizer: &Sanitizer) -> Result<Self, AppError> {
        let form = Self {
            name: sanitize_field(sanitizer, &self.name),
            city: sanitize_field(sanitizer, &self.city),
            age: self.age,
        };

        if let Err(validation_errors) = form.validate() {
            tracing::warn!("Rejected customer form: {}", validation_errors);
            return Err(validation_errors.into());
        }

        Ok(form)
    }
}
