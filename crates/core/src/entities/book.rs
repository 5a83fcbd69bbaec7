//! Book entity
//!
//! A book has a single validated field: its title.
//!
//! ## Validation
//!
//! Titles must contain at least one non-whitespace character. A failed
//! update leaves the previous title in place, so a `Book` is never
//! observably invalid.

use super::validate_text;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A book in the catalog
///
/// The title is private and only reachable through the validated
/// constructor and setter, so every `Book` holds non-empty text.
///
/// # Example
///
/// ```
/// use imprint_core::Book;
///
/// let mut book = Book::new("Dune")?;
/// assert_eq!(book.title(), "Dune");
///
/// book.set_title("Dune Messiah")?;
/// assert_eq!(book.title(), "Dune Messiah");
/// # Ok::<(), imprint_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
}

impl Book {
    /// Create a new book with the given title
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` if the title is empty or
    /// whitespace-only.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        validate_text("title", &title)?;
        Ok(Book { title })
    }

    /// Get the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title, re-validating the new value
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` for an empty or whitespace-only
    /// title; the previous title is left unchanged.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        validate_text("title", &title)?;
        self.title = title;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_new_stores_title_verbatim() {
        let book = Book::new("The Left Hand of Darkness").unwrap();
        assert_eq!(book.title(), "The Left Hand of Darkness");
    }

    #[test]
    fn test_new_rejects_empty_title() {
        assert_eq!(
            Book::new(""),
            Err(ValidationError::EmptyText { field: "title" })
        );
    }

    #[test]
    fn test_new_rejects_whitespace_title() {
        assert!(Book::new("   ").is_err());
    }

    #[test]
    fn test_set_title_replaces_value() {
        let mut book = Book::new("Draft").unwrap();
        book.set_title("Final").unwrap();
        assert_eq!(book.title(), "Final");
    }

    #[test]
    fn test_failed_set_title_keeps_previous_value() {
        let mut book = Book::new("Dune").unwrap();
        let err = book.set_title("  ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyText { field: "title" });
        assert_eq!(book.title(), "Dune");
    }

    #[test]
    fn test_serde_roundtrip() {
        let book = Book::new("Hyperion").unwrap();
        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
