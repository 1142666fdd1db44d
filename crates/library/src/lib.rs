//! Library lending: books tracked as copies on the shelf versus copies on loan.

pub mod book;
pub mod catalog;

pub use book::Book;
pub use catalog::LibraryCatalog;
