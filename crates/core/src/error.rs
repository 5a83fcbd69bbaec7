//! Error types for the imprint catalog
//!
//! This module defines the single error kind used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::{AuthorId, BookId, ContractId};
use thiserror::Error;

/// Result type alias for imprint operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// The single error kind raised when a field value fails its rule
///
/// Validation failures are deterministic functions of their input: the same
/// bad input always fails the same way. A failed construction registers
/// nothing, and a failed update leaves the prior value unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A text field was empty or whitespace-only
    #[error("{field} must be non-empty text")]
    EmptyText {
        /// Name of the offending field
        field: &'static str,
    },

    /// An author handle did not resolve in the catalog
    #[error("unknown author: {0}")]
    UnknownAuthor(AuthorId),

    /// A book handle did not resolve in the catalog
    #[error("unknown book: {0}")]
    UnknownBook(BookId),

    /// A contract handle did not resolve in the catalog
    #[error("unknown contract: {0}")]
    UnknownContract(ContractId),
}
