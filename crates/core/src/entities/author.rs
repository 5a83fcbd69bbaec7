//! Author entity
//!
//! Mirrors [`Book`](super::Book): one validated text field, here the
//! author's name.

use super::validate_text;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An author in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    name: String,
}

impl Author {
    /// Create a new author with the given name
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_text("name", &name)?;
        Ok(Author { name })
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name, re-validating the new value
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` for an empty or whitespace-only
    /// name; the previous name is left unchanged.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_text("name", &name)?;
        self.name = name;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_new_stores_name() {
        let author = Author::new("Ursula K. Le Guin").unwrap();
        assert_eq!(author.name(), "Ursula K. Le Guin");
    }

    #[test]
    fn test_new_rejects_empty_name() {
        assert_eq!(
            Author::new(""),
            Err(ValidationError::EmptyText { field: "name" })
        );
    }

    #[test]
    fn test_failed_set_name_keeps_previous_value() {
        let mut author = Author::new("Frank Herbert").unwrap();
        assert!(author.set_name("\t").is_err());
        assert_eq!(author.name(), "Frank Herbert");
    }

    #[test]
    fn test_set_name_replaces_value() {
        let mut author = Author::new("F. Herbert").unwrap();
        author.set_name("Frank Herbert").unwrap();
        assert_eq!(author.name(), "Frank Herbert");
    }
}
