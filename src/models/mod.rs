pub mod book;
pub mod customer;

use crate::utils::html::Sanitizer;

/// Cleans one user-supplied text field before it is validated or stored.
pub(crate) fn sanitize_field(sanitizer: &Sanitizer, value: &str) -> String {
    sanitizer.clean(value).trim().to_string()
}
