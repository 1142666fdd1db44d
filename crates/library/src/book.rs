use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity, Isbn};
use stockbook_inventory::StockItem;

/// A lendable title. Identity is the ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    isbn: Isbn,
    title: String,
    author: String,
    genre: String,
    /// What the library charges for a lost copy, in smallest currency unit.
    #[serde(default)]
    replacement_cost: u64,
}

impl Book {
    pub fn new(
        isbn: Isbn,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        Ok(Self {
            isbn,
            title,
            author: author.into(),
            genre: genre.into(),
            replacement_cost: 0,
        })
    }

    pub fn with_replacement_cost(mut self, cost: u64) -> Self {
        self.replacement_cost = cost;
        self
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }
}

impl core::fmt::Display for Book {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} by {} ({}) - ISBN: {}",
            self.title, self.author, self.genre, self.isbn
        )
    }
}

impl Entity for Book {
    type Id = Isbn;

    fn id(&self) -> &Self::Id {
        &self.isbn
    }
}

impl StockItem for Book {
    fn unit_price(&self) -> u64 {
        self.replacement_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_catalog_listing_format() {
        let book = Book::new(
            Isbn::parse("9780061120084").unwrap(),
            "To Kill a Mockingbird",
            "Harper Lee",
            "Classic",
        )
        .unwrap();
        assert_eq!(
            book.to_string(),
            "To Kill a Mockingbird by Harper Lee (Classic) - ISBN: 9780061120084"
        );
    }

    #[test]
    fn replacement_cost_is_the_unit_price() {
        let book = Book::new(Isbn::parse("1").unwrap(), "Atlas", "Anon", "Reference")
            .unwrap()
            .with_replacement_cost(2_500);
        assert_eq!(book.unit_price(), 2_500);
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(Book::new(Isbn::parse("1").unwrap(), " ", "Anon", "Misc").is_err());
    }
}
