//! Entity types for the catalog
//!
//! Three entity kinds make up the relationship graph:
//! - [`Book`]: a title
//! - [`Author`]: a name
//! - [`Contract`]: the join entity linking one author to one book, carrying
//!   a date and a royalty amount
//!
//! Every text field is validated on construction and on every update: it
//! must contain at least one non-whitespace character. The stored value is
//! the caller's string unmodified.

mod author;
mod book;
mod contract;

pub use author::Author;
pub use book::Book;
pub use contract::Contract;

use crate::error::{Result, ValidationError};

/// Validate a text field value
///
/// Rejects empty and whitespace-only strings. The value itself is not
/// trimmed or otherwise normalized.
pub(crate) fn validate_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyText { field });
    }
    Ok(())
}
