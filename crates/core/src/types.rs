//! Handle types for catalog entities
//!
//! This module defines the typed handles used to address entities:
//! - BookId: Handle for a registered book
//! - AuthorId: Handle for a registered author
//! - ContractId: Handle for a registered contract
//!
//! A handle wraps the entity's insertion index in its registry. Registries
//! are append-only, so a handle stays valid for the life of the catalog
//! that issued it. Equality of handles is entity identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle for a registered book
///
/// Wraps the book's insertion index in the book registry. Handles are only
/// meaningful to the catalog that issued them; a handle from another catalog
/// either fails to resolve or resolves to an unrelated book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u32);

impl BookId {
    /// Create a handle from a raw registry index
    pub fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw registry index of this handle
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "book-{}", self.0)
    }
}

/// Handle for a registered author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(u32);

impl AuthorId {
    /// Create a handle from a raw registry index
    pub fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw registry index of this handle
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "author-{}", self.0)
    }
}

/// Handle for a registered contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(u32);

impl ContractId {
    /// Create a handle from a raw registry index
    pub fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw registry index of this handle
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contract-{}", self.0)
    }
}
