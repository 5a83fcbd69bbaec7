//! Imprint - In-memory publishing catalog
//!
//! Imprint models the many-to-many relationship between books and authors,
//! joined by contracts that carry their own attributes (a date and a royalty
//! amount). Everything lives in memory inside a [`Catalog`] value; there is
//! no persistence, no global state, and no concurrency.
//!
//! # Quick Start
//!
//! ```
//! use imprint::Catalog;
//!
//! let mut catalog = Catalog::new();
//!
//! // Register entities and link them with a contract
//! let book = catalog.add_book("Dune")?;
//! let author = catalog.add_author("Frank Herbert")?;
//! catalog.sign_contract(author, book, "2024-01-01", 5000)?;
//!
//! // Relationship queries are computed from the contract registry
//! assert_eq!(catalog.books_of(author).collect::<Vec<_>>(), vec![book]);
//! assert_eq!(catalog.total_royalties(author), 5000);
//! # Ok::<(), imprint::ValidationError>(())
//! ```
//!
//! # Architecture
//!
//! All state lives in the [`Catalog`] repository from `imprint-catalog`;
//! entity types, typed handles, and the error type come from `imprint-core`.
//! This crate re-exports the whole public surface so consumers depend on a
//! single crate.

// Re-export the public API
pub use imprint_catalog::{Catalog, Registry};
pub use imprint_core::{
    Author, AuthorId, Book, BookId, Contract, ContractId, Result, ValidationError,
};
