//! `stockbook-core`: domain foundation building blocks.
//!
//! Errors, identifiers and the aggregate/entity traits shared by every
//! ledger-owning crate. No IO, no logging setup.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::{Aggregate, AggregateRoot};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, Isbn, LedgerId, RestaurantId, Sku};
