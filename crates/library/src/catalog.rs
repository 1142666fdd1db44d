use std::sync::Arc;

use stockbook_core::{DomainError, DomainResult, Entity, Isbn};
use stockbook_inventory::{InventoryLedger, QuantityPolicy};

use crate::book::Book;

/// The library's holdings.
///
/// Each copy is either on the shelf or on loan; borrowing and returning move
/// one copy between the two ledgers, so the total number of copies per book
/// only changes through [`LibraryCatalog::add_copies`].
#[derive(Debug, Default)]
pub struct LibraryCatalog {
    books: Vec<Arc<Book>>,
    shelf: InventoryLedger<Book>,
    loans: InventoryLedger<Book>,
}

impl LibraryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: Book) -> DomainResult<Arc<Book>> {
        self.add_copies(book, 1)
    }

    /// Put `copies` (at least one) of a book on the shelf.
    pub fn add_copies(&mut self, book: Book, copies: i64) -> DomainResult<Arc<Book>> {
        QuantityPolicy::StrictlyPositive.check(copies)?;

        let known = self.books.iter().find(|b| b.isbn() == book.isbn()).cloned();
        let (book, is_new) = match known {
            Some(existing) if *existing != book => {
                return Err(DomainError::conflict(format!(
                    "ISBN {} is already catalogued as '{}'",
                    existing.isbn(),
                    existing.title()
                )));
            }
            Some(existing) => (existing, false),
            None => (Arc::new(book), true),
        };

        self.shelf.add(book.clone(), copies)?;
        if is_new {
            self.books.push(book.clone());
        }
        tracing::debug!(isbn = %book.isbn(), title = %book.title(), copies, "copies shelved");
        Ok(book)
    }

    /// First book with exactly this title.
    pub fn get_book_details(&self, title: &str) -> DomainResult<Arc<Book>> {
        self.books
            .iter()
            .find(|b| b.title() == title)
            .cloned()
            .ok_or_else(|| {
                DomainError::not_found(format!("book with title '{title}' is not in the catalog"))
            })
    }

    /// All catalogued books in the order they were first added.
    pub fn get_all_books(&self) -> &[Arc<Book>] {
        &self.books
    }

    pub fn borrow_book(&mut self, title: &str) -> DomainResult<()> {
        let book = self.get_book_details(title)?;
        let isbn = book.id();
        if self.shelf.quantity_of(isbn) == 0 {
            return Err(DomainError::conflict(format!(
                "the book '{title}' is already borrowed"
            )));
        }
        self.shelf.transfer_to(isbn, 1, &mut self.loans)?;
        tracing::info!(%isbn, title, "book borrowed");
        Ok(())
    }

    pub fn return_book(&mut self, title: &str) -> DomainResult<()> {
        let book = self.get_book_details(title)?;
        let isbn = book.id();
        if self.loans.quantity_of(isbn) == 0 {
            return Err(DomainError::conflict(format!(
                "the book '{title}' is already available"
            )));
        }
        self.loans.transfer_to(isbn, 1, &mut self.shelf)?;
        tracing::info!(%isbn, title, "book returned");
        Ok(())
    }

    pub fn is_available(&self, title: &str) -> DomainResult<bool> {
        let book = self.get_book_details(title)?;
        Ok(self.shelf.quantity_of(book.id()) > 0)
    }

    pub fn copies_available(&self, isbn: &Isbn) -> i64 {
        self.shelf.quantity_of(isbn)
    }

    pub fn copies_on_loan(&self, isbn: &Isbn) -> i64 {
        self.loans.quantity_of(isbn)
    }

    /// Replacement value of every copy the library owns, shelved or lent.
    pub fn collection_value(&self) -> u128 {
        self.shelf
            .total_value()
            .saturating_add(self.loans.total_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(isbn: &str, title: &str) -> Book {
        Book::new(Isbn::parse(isbn).unwrap(), title, "Some Author", "Classic").unwrap()
    }

    fn catalog() -> LibraryCatalog {
        let mut catalog = LibraryCatalog::new();
        catalog
            .add_book(book("978074327234", "Ghumne mech ma andho manche"))
            .unwrap();
        catalog
            .add_book(book("9780061120084", "To Kill a Mockingbird"))
            .unwrap();
        catalog
    }

    #[test]
    fn unknown_title_is_not_found() {
        let catalog = catalog();
        let err = catalog.get_book_details("The Great Gatsby").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(msg) if msg.contains("The Great Gatsby")));
    }

    #[test]
    fn lists_books_in_insertion_order() {
        let catalog = catalog();
        let titles: Vec<&str> = catalog.get_all_books().iter().map(|b| b.title()).collect();
        assert_eq!(
            titles,
            vec!["Ghumne mech ma andho manche", "To Kill a Mockingbird"]
        );
    }

    #[test]
    fn borrow_then_return_cycles_availability() {
        let mut catalog = catalog();
        let title = "To Kill a Mockingbird";

        catalog.borrow_book(title).unwrap();
        assert!(!catalog.is_available(title).unwrap());

        let err = catalog.borrow_book(title).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(msg) if msg.contains("already borrowed")));

        catalog.return_book(title).unwrap();
        assert!(catalog.is_available(title).unwrap());

        let err = catalog.return_book(title).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(msg) if msg.contains("already available")));
    }

    #[test]
    fn borrowing_unknown_title_is_not_found() {
        let mut catalog = catalog();
        assert!(matches!(
            catalog.borrow_book("The Great Gatsby"),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn multiple_copies_lend_independently() {
        let mut catalog = LibraryCatalog::new();
        let atlas = catalog.add_copies(book("1", "Atlas"), 2).unwrap();

        catalog.borrow_book("Atlas").unwrap();
        catalog.borrow_book("Atlas").unwrap();
        assert!(catalog.borrow_book("Atlas").is_err());
        assert_eq!(catalog.copies_on_loan(atlas.isbn()), 2);
        assert_eq!(catalog.copies_available(atlas.isbn()), 0);
        assert_eq!(catalog.get_all_books().len(), 1);
    }

    #[test]
    fn adding_more_copies_reuses_catalog_entry() {
        let mut catalog = LibraryCatalog::new();
        catalog.add_book(book("1", "Atlas")).unwrap();
        catalog.add_copies(book("1", "Atlas"), 3).unwrap();
        assert_eq!(catalog.get_all_books().len(), 1);
        assert_eq!(catalog.copies_available(&Isbn::parse("1").unwrap()), 4);
    }

    #[test]
    fn conflicting_isbn_is_rejected() {
        let mut catalog = LibraryCatalog::new();
        catalog.add_book(book("1", "Atlas")).unwrap();
        let err = catalog.add_book(book("1", "Almanac")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(catalog.get_all_books().len(), 1);
    }

    #[test]
    fn zero_copies_are_rejected() {
        let mut catalog = LibraryCatalog::new();
        let err = catalog.add_copies(book("1", "Atlas"), 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuantity(_)));
        assert!(catalog.get_all_books().is_empty());
    }

    #[test]
    fn collection_value_saturates_instead_of_overflowing() {
        let mut catalog = LibraryCatalog::new();
        for (isbn, title) in [("1", "Atlas"), ("2", "Almanac"), ("3", "Compendium")] {
            catalog
                .add_copies(book(isbn, title).with_replacement_cost(u64::MAX), i64::MAX)
                .unwrap();
        }
        // Shelf value saturates on its own; the loan adds one more copy on top.
        catalog.borrow_book("Atlas").unwrap();

        assert_eq!(catalog.collection_value(), u128::MAX);
    }

    #[test]
    fn collection_value_counts_lent_copies() {
        let mut catalog = LibraryCatalog::new();
        catalog
            .add_copies(book("1", "Atlas").with_replacement_cost(2_000), 2)
            .unwrap();
        catalog.borrow_book("Atlas").unwrap();
        assert_eq!(catalog.collection_value(), 4_000);
    }
}
