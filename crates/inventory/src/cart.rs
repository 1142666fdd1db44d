//! Customer-side cart: a ledger plus a quantity policy and checkout.

use std::sync::Arc;

use stockbook_core::DomainResult;

use crate::item::StockItem;
use crate::ledger::InventoryLedger;
use crate::policy::QuantityPolicy;

/// Result of a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was charged `total` and emptied.
    Completed { total: u128, lines: usize },
    /// The cart had no value; nothing was changed.
    NothingToCheckout,
}

#[derive(Debug)]
pub struct Cart<I: StockItem> {
    ledger: InventoryLedger<I>,
    policy: QuantityPolicy,
}

impl<I: StockItem> Cart<I> {
    pub fn new(policy: QuantityPolicy) -> Self {
        Self {
            ledger: InventoryLedger::new(),
            policy,
        }
    }

    pub fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    pub fn add(&mut self, item: Arc<I>, quantity: i64) -> DomainResult<()> {
        self.policy.check(quantity)?;
        self.ledger.add(item, quantity)
    }

    pub fn remove(&mut self, item_id: &I::Id, quantity: i64) -> DomainResult<()> {
        self.ledger.remove(item_id, quantity)
    }

    pub fn total(&self) -> u128 {
        self.ledger.total_value()
    }

    pub fn ledger(&self) -> &InventoryLedger<I> {
        &self.ledger
    }

    /// Empty the cart if it has positive value.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        let total = self.ledger.total_value();
        if total == 0 {
            return CheckoutOutcome::NothingToCheckout;
        }
        let lines = self.ledger.len();
        self.ledger.clear();
        CheckoutOutcome::Completed { total, lines }
    }
}

impl<I: StockItem> Default for Cart<I> {
    fn default() -> Self {
        Self::new(QuantityPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::{AggregateRoot, DomainError, Entity};

    #[derive(Debug, Clone, PartialEq)]
    struct Dish {
        name: String,
        price: u64,
    }

    impl Entity for Dish {
        type Id = String;

        fn id(&self) -> &Self::Id {
            &self.name
        }
    }

    impl StockItem for Dish {
        fn unit_price(&self) -> u64 {
            self.price
        }
    }

    fn dish(name: &str, price: u64) -> Arc<Dish> {
        Arc::new(Dish {
            name: name.to_string(),
            price,
        })
    }

    #[test]
    fn checkout_reports_total_and_empties_cart() {
        let mut cart = Cart::default();
        cart.add(dish("Burger", 8), 2).unwrap();
        cart.add(dish("Pizza", 12), 3).unwrap();

        assert_eq!(
            cart.checkout(),
            CheckoutOutcome::Completed {
                total: 52,
                lines: 2
            }
        );
        assert!(cart.ledger().is_empty());
    }

    #[test]
    fn empty_checkout_is_a_no_op() {
        let mut cart: Cart<Dish> = Cart::default();
        assert_eq!(cart.checkout(), CheckoutOutcome::NothingToCheckout);
        assert_eq!(cart.checkout(), CheckoutOutcome::NothingToCheckout);
    }

    #[test]
    fn zero_value_cart_is_not_cleared() {
        let mut cart = Cart::default();
        cart.add(dish("Water", 0), 1).unwrap();
        assert_eq!(cart.checkout(), CheckoutOutcome::NothingToCheckout);
        assert_eq!(cart.ledger().len(), 1);
    }

    #[test]
    fn strict_policy_rejects_zero_before_touching_ledger() {
        let mut cart = Cart::new(QuantityPolicy::StrictlyPositive);
        let err = cart.add(dish("Pasta", 10), 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuantity(_)));
        assert_eq!(cart.ledger().version(), 0);
    }
}
