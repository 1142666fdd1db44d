//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable: the component that returns it is
/// left in its last valid state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A quantity was negative, or failed a caller's stricter policy.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A removal or transfer targeted an item with no ledger entry.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// An exact withdrawal asked for more units than are held.
    #[error("insufficient quantity for {item}: requested {requested}, available {available}")]
    InsufficientQuantity {
        item: String,
        requested: i64,
        available: i64,
    },

    /// Adding would overflow the quantity counter.
    #[error("quantity overflow for {0}")]
    QuantityOverflow(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A collaborator lookup found nothing (e.g. unknown book title).
    #[error("not found: {0}")]
    NotFound(String),

    /// The requested transition conflicts with current state.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn item_not_found(item: impl core::fmt::Display) -> Self {
        Self::ItemNotFound(item.to_string())
    }

    pub fn insufficient(item: impl core::fmt::Display, requested: i64, available: i64) -> Self {
        Self::InsufficientQuantity {
            item: item.to_string(),
            requested,
            available,
        }
    }

    pub fn overflow(item: impl core::fmt::Display) -> Self {
        Self::QuantityOverflow(item.to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_quantity_message_names_item_and_amounts() {
        let err = DomainError::insufficient("PIZZA", 6, 5);
        assert_eq!(
            err.to_string(),
            "insufficient quantity for PIZZA: requested 6, available 5"
        );
    }

    #[test]
    fn item_not_found_uses_display_of_identity() {
        let err = DomainError::item_not_found("Burger");
        assert_eq!(err, DomainError::ItemNotFound("Burger".to_string()));
        assert_eq!(err.to_string(), "item not found: Burger");
    }
}
