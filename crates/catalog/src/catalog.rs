//! The catalog repository
//!
//! ## Design
//!
//! `Catalog` owns one append-only registry per entity kind and is the only
//! way to create, update, or query registered entities. There is no global
//! state: callers hold a `Catalog` value and every operation goes through
//! it, `&self` for queries and `&mut self` for mutation.
//!
//! ## Relationship queries
//!
//! The contract registry is the single source of truth for the
//! author–book graph. Every relationship query is a filter over that
//! registry, recomputed on each call and yielded in registry (creation)
//! order. Nothing is cached.
//!
//! ## Validation
//!
//! Mutating operations resolve every handle they are given and re-validate
//! every field value before touching state. The first failing check aborts
//! the operation with a [`ValidationError`] and leaves the catalog exactly
//! as it was: a failed add registers nothing, a failed update overwrites
//! nothing.

use imprint_core::{
    Author, AuthorId, Book, BookId, Contract, ContractId, Result, ValidationError,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::Registry;

/// In-memory repository of books, authors, and the contracts joining them
///
/// # Example
///
/// ```
/// use imprint_catalog::Catalog;
///
/// let mut catalog = Catalog::new();
/// let book = catalog.add_book("Dune")?;
/// let author = catalog.add_author("Frank Herbert")?;
/// let contract = catalog.sign_contract(author, book, "2024-01-01", 5000)?;
///
/// assert_eq!(catalog.authors_of(book).collect::<Vec<_>>(), vec![author]);
/// assert_eq!(catalog.total_royalties(author), 5000);
/// # Ok::<(), imprint_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    books: Registry<Book>,
    authors: Registry<Author>,
    contracts: Registry<Contract>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Books ==========

    /// Register a new book and return its handle
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` if the title is empty or
    /// whitespace-only; nothing is registered in that case.
    pub fn add_book(&mut self, title: impl Into<String>) -> Result<BookId> {
        let book = Book::new(title)?;
        let id = BookId::from_index(self.books.append(book));
        debug!(target: "imprint::catalog", book = %id, "Book registered");
        Ok(id)
    }

    /// Resolve a book handle
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.index())
    }

    /// Iterate over all books in creation order
    pub fn books(&self) -> impl Iterator<Item = (BookId, &Book)> {
        self.books
            .indexed()
            .map(|(index, book)| (BookId::from_index(index), book))
    }

    /// Number of registered books
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Replace a book's title
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownBook` if the handle does not
    /// resolve, or `ValidationError::EmptyText` if the new title fails
    /// validation. The previous title survives a failed rename.
    pub fn rename_book(&mut self, id: BookId, title: impl Into<String>) -> Result<()> {
        let book = self
            .books
            .get_mut(id.index())
            .ok_or(ValidationError::UnknownBook(id))?;
        book.set_title(title)
    }

    /// All contracts for a book, in creation order
    ///
    /// Recomputed on every call. A handle that does not resolve matches no
    /// contracts and yields an empty sequence.
    pub fn contracts_for_book(&self, book: BookId) -> impl Iterator<Item = ContractId> + '_ {
        self.contracts
            .indexed()
            .filter(move |(_, contract)| contract.book() == book)
            .map(|(index, _)| ContractId::from_index(index))
    }

    /// Authors linked to a book via contracts, in contract creation order
    ///
    /// An author appears once per contract, so duplicates are possible.
    pub fn authors_of(&self, book: BookId) -> impl Iterator<Item = AuthorId> + '_ {
        self.contracts
            .iter()
            .filter(move |contract| contract.book() == book)
            .map(Contract::author)
    }

    // ========== Authors ==========

    /// Register a new author and return their handle
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` if the name is empty or
    /// whitespace-only; nothing is registered in that case.
    pub fn add_author(&mut self, name: impl Into<String>) -> Result<AuthorId> {
        let author = Author::new(name)?;
        let id = AuthorId::from_index(self.authors.append(author));
        debug!(target: "imprint::catalog", author = %id, "Author registered");
        Ok(id)
    }

    /// Resolve an author handle
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id.index())
    }

    /// Iterate over all authors in creation order
    pub fn authors(&self) -> impl Iterator<Item = (AuthorId, &Author)> {
        self.authors
            .indexed()
            .map(|(index, author)| (AuthorId::from_index(index), author))
    }

    /// Number of registered authors
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Replace an author's name
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownAuthor` if the handle does not
    /// resolve, or `ValidationError::EmptyText` if the new name fails
    /// validation. The previous name survives a failed rename.
    pub fn rename_author(&mut self, id: AuthorId, name: impl Into<String>) -> Result<()> {
        let author = self
            .authors
            .get_mut(id.index())
            .ok_or(ValidationError::UnknownAuthor(id))?;
        author.set_name(name)
    }

    /// All contracts for an author, in creation order
    pub fn contracts_for_author(&self, author: AuthorId) -> impl Iterator<Item = ContractId> + '_ {
        self.contracts
            .indexed()
            .filter(move |(_, contract)| contract.author() == author)
            .map(|(index, _)| ContractId::from_index(index))
    }

    /// Books linked to an author via contracts, in contract creation order
    ///
    /// A book appears once per contract, so duplicates are possible.
    pub fn books_of(&self, author: AuthorId) -> impl Iterator<Item = BookId> + '_ {
        self.contracts
            .iter()
            .filter(move |contract| contract.author() == author)
            .map(Contract::book)
    }

    /// Sum of royalties across an author's contracts
    ///
    /// An author with no contracts sums to 0 (empty sum, not an error), as
    /// does a handle that resolves to nothing.
    pub fn total_royalties(&self, author: AuthorId) -> i64 {
        self.contracts
            .iter()
            .filter(|contract| contract.author() == author)
            .map(Contract::royalties)
            .sum()
    }

    /// Author-side signing flow: register a contract for this author
    ///
    /// Equivalent to [`add_contract`](Self::add_contract) with the same
    /// arguments; validation failures propagate unchanged.
    pub fn sign_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Result<ContractId> {
        self.add_contract(author, book, date, royalties)
    }

    // ========== Contracts ==========

    /// Register a new contract linking an author to a book
    ///
    /// Checks run in a fixed order: the author handle must resolve, then
    /// the book handle, then the date must be non-empty text. The first
    /// failing check aborts with nothing registered.
    ///
    /// # Errors
    ///
    /// `ValidationError::UnknownAuthor`, `ValidationError::UnknownBook`, or
    /// `ValidationError::EmptyText`, per the failing check.
    pub fn add_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Result<ContractId> {
        if !self.authors.contains(author.index()) {
            return Err(ValidationError::UnknownAuthor(author));
        }
        if !self.books.contains(book.index()) {
            return Err(ValidationError::UnknownBook(book));
        }
        let contract = Contract::new(author, book, date, royalties)?;
        let id = ContractId::from_index(self.contracts.append(contract));
        debug!(
            target: "imprint::catalog",
            contract = %id,
            author = %author,
            book = %book,
            "Contract signed"
        );
        Ok(id)
    }

    /// Resolve a contract handle
    pub fn contract(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.get(id.index())
    }

    /// Iterate over all contracts in creation order
    pub fn contracts(&self) -> impl Iterator<Item = (ContractId, &Contract)> {
        self.contracts
            .indexed()
            .map(|(index, contract)| (ContractId::from_index(index), contract))
    }

    /// Number of registered contracts
    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    /// Point a contract at a different author
    ///
    /// # Errors
    ///
    /// `ValidationError::UnknownContract` if the contract handle does not
    /// resolve, `ValidationError::UnknownAuthor` if the new author does
    /// not; the contract is unchanged on failure.
    pub fn reassign_contract_author(
        &mut self,
        contract: ContractId,
        author: AuthorId,
    ) -> Result<()> {
        let entry = self
            .contracts
            .get_mut(contract.index())
            .ok_or(ValidationError::UnknownContract(contract))?;
        if !self.authors.contains(author.index()) {
            return Err(ValidationError::UnknownAuthor(author));
        }
        entry.set_author(author);
        Ok(())
    }

    /// Point a contract at a different book
    ///
    /// # Errors
    ///
    /// `ValidationError::UnknownContract` or `ValidationError::UnknownBook`;
    /// the contract is unchanged on failure.
    pub fn reassign_contract_book(&mut self, contract: ContractId, book: BookId) -> Result<()> {
        let entry = self
            .contracts
            .get_mut(contract.index())
            .ok_or(ValidationError::UnknownContract(contract))?;
        if !self.books.contains(book.index()) {
            return Err(ValidationError::UnknownBook(book));
        }
        entry.set_book(book);
        Ok(())
    }

    /// Replace a contract's date
    ///
    /// # Errors
    ///
    /// `ValidationError::UnknownContract` if the handle does not resolve,
    /// or `ValidationError::EmptyText` if the new date fails validation;
    /// the previous date survives a failed update.
    pub fn set_contract_date(&mut self, contract: ContractId, date: impl Into<String>) -> Result<()> {
        let entry = self
            .contracts
            .get_mut(contract.index())
            .ok_or(ValidationError::UnknownContract(contract))?;
        entry.set_date(date)
    }

    /// Replace a contract's royalty amount
    ///
    /// The amount itself cannot fail validation (any `i64` is accepted,
    /// negatives included), but the contract handle must resolve.
    ///
    /// # Errors
    ///
    /// `ValidationError::UnknownContract` if the handle does not resolve.
    pub fn set_contract_royalties(&mut self, contract: ContractId, royalties: i64) -> Result<()> {
        let entry = self
            .contracts
            .get_mut(contract.index())
            .ok_or(ValidationError::UnknownContract(contract))?;
        entry.set_royalties(royalties);
        Ok(())
    }

    /// All contracts whose date equals `date` exactly, in creation order
    ///
    /// Catalog-wide query. Dates are opaque strings: comparison is exact
    /// equality, with no normalization or range matching.
    pub fn contracts_by_date<'a>(&'a self, date: &'a str) -> impl Iterator<Item = ContractId> + 'a {
        self.contracts
            .indexed()
            .filter(move |(_, contract)| contract.date() == date)
            .map(|(index, _)| ContractId::from_index(index))
    }
}
