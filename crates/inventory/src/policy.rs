use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult};

/// Caller-side rule for quantities accepted by `add`.
///
/// The ledger itself only rejects negatives. Customer-facing carts may want
/// to reject zero as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityPolicy {
    #[default]
    NonNegative,
    StrictlyPositive,
}

impl QuantityPolicy {
    pub fn check(self, quantity: i64) -> DomainResult<()> {
        match self {
            QuantityPolicy::NonNegative if quantity < 0 => Err(DomainError::invalid_quantity(
                format!("quantity cannot be negative (got {quantity})"),
            )),
            QuantityPolicy::StrictlyPositive if quantity <= 0 => Err(
                DomainError::invalid_quantity(format!(
                    "quantity must be greater than zero (got {quantity})"
                )),
            ),
            _ => Ok(()),
        }
    }
}
