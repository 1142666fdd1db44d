//! Product catalog items.
//!
//! A [`Product`] is the sellable item tracked by shopping carts.

pub mod product;

pub use product::Product;
