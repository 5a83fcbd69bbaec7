//! Core types for the imprint catalog
//!
//! This crate defines the foundational types used throughout the system:
//! - BookId, AuthorId, ContractId: Typed handles for registered entities
//! - Book, Author: The two related entity kinds
//! - Contract: The join entity linking one author to one book
//! - ValidationError: The single error kind
//!
//! Entity fields are validated at every construction and update, so a value
//! of any entity type is always observably valid.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;
pub mod error;
pub mod types;

// Re-export commonly used types at the crate root
pub use entities::{Author, Book, Contract};
pub use error::{Result, ValidationError};
pub use types::{AuthorId, BookId, ContractId};
