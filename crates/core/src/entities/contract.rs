//! Contract entity
//!
//! A contract is the join entity of the catalog: it links exactly one
//! author to exactly one book and carries its own attributes, a date and a
//! royalty amount.
//!
//! ## Validation
//!
//! - `date` must be non-empty text. Dates are opaque strings compared by
//!   exact equality; no parsing or normalization happens here.
//! - `royalties` is a plain `i64`; zero and negative amounts are allowed.
//! - The `author` and `book` handles are typed, so kind confusion cannot
//!   happen. Whether a handle actually resolves is a registry question and
//!   is checked by the catalog whenever a contract is registered or
//!   relinked, not by this type.

use super::validate_text;
use crate::error::Result;
use crate::types::{AuthorId, BookId};
use serde::{Deserialize, Serialize};

/// A signed contract linking one author to one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    author: AuthorId,
    book: BookId,
    date: String,
    royalties: i64,
}

impl Contract {
    /// Create a new contract
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` if the date is empty or
    /// whitespace-only.
    pub fn new(
        author: AuthorId,
        book: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Result<Self> {
        let date = date.into();
        validate_text("date", &date)?;
        Ok(Contract {
            author,
            book,
            date,
            royalties,
        })
    }

    /// Handle of the contracted author
    pub fn author(&self) -> AuthorId {
        self.author
    }

    /// Handle of the contracted book
    pub fn book(&self) -> BookId {
        self.book
    }

    /// Contract date, exactly as given at construction
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Royalty amount (may be zero or negative)
    pub fn royalties(&self) -> i64 {
        self.royalties
    }

    /// Point the contract at a different author
    pub fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    /// Point the contract at a different book
    pub fn set_book(&mut self, book: BookId) {
        self.book = book;
    }

    /// Replace the date, re-validating the new value
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` for an empty or whitespace-only
    /// date; the previous date is left unchanged.
    pub fn set_date(&mut self, date: impl Into<String>) -> Result<()> {
        let date = date.into();
        validate_text("date", &date)?;
        self.date = date;
        Ok(())
    }

    /// Replace the royalty amount
    pub fn set_royalties(&mut self, royalties: i64) {
        self.royalties = royalties;
    }
}
