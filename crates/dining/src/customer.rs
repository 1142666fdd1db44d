use std::sync::Arc;

use stockbook_core::{CustomerId, DomainResult};
use stockbook_inventory::{Cart, CheckoutOutcome, QuantityPolicy};

use crate::food::FoodItem;

/// A diner ordering from restaurants.
///
/// The cart is independent of any menu until a restaurant fulfils it.
#[derive(Debug)]
pub struct DiningCustomer {
    id: CustomerId,
    name: String,
    address: String,
    cart: Cart<FoodItem>,
}

impl DiningCustomer {
    /// Diner carts reject zero quantities unless configured otherwise.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::with_policy(name, address, QuantityPolicy::StrictlyPositive)
    }

    pub fn with_policy(
        name: impl Into<String>,
        address: impl Into<String>,
        policy: QuantityPolicy,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            address: address.into(),
            cart: Cart::new(policy),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn cart(&self) -> &Cart<FoodItem> {
        &self.cart
    }

    pub fn add_to_cart(&mut self, item: Arc<FoodItem>, quantity: i64) -> DomainResult<()> {
        let dish = item.name().to_string();
        self.cart.add(item, quantity).inspect_err(|err| {
            tracing::warn!(customer_id = %self.id, %dish, quantity, error = %err, "add to cart rejected");
        })
    }

    pub fn remove_from_cart(&mut self, dish: &str, quantity: i64) -> DomainResult<()> {
        self.cart.remove(&dish.to_string(), quantity).inspect_err(|err| {
            tracing::warn!(customer_id = %self.id, %dish, quantity, error = %err, "remove from cart rejected");
        })
    }

    pub fn cart_total(&self) -> u128 {
        self.cart.total()
    }

    pub fn checkout(&mut self) -> CheckoutOutcome {
        let outcome = self.cart.checkout();
        match outcome {
            CheckoutOutcome::Completed { total, lines } => {
                tracing::info!(customer_id = %self.id, total = %total, lines, "checkout completed");
            }
            CheckoutOutcome::NothingToCheckout => {
                tracing::info!(customer_id = %self.id, "cart is empty; nothing to checkout");
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_core::DomainError;

    fn dish(name: &str, price: u64) -> Arc<FoodItem> {
        Arc::new(FoodItem::new(name, price).unwrap())
    }

    #[test]
    fn alice_orders_burgers_and_pizza() {
        let mut alice = DiningCustomer::new("Alice", "123 Main St.");
        alice.add_to_cart(dish("Burger", 8), 2).unwrap();
        alice.add_to_cart(dish("Pizza", 12), 3).unwrap();

        let err = alice.add_to_cart(dish("Pasta", 10), -2).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuantity(_)));

        assert_eq!(alice.cart_total(), 52);
        assert_eq!(alice.cart().ledger().len(), 2);
    }

    #[test]
    fn diner_cart_rejects_zero_by_default() {
        let mut bob = DiningCustomer::new("Bob", "9 Side Rd.");
        assert!(bob.add_to_cart(dish("Burger", 8), 0).is_err());

        let mut carol =
            DiningCustomer::with_policy("Carol", "1 High St.", QuantityPolicy::NonNegative);
        assert!(carol.add_to_cart(dish("Burger", 8), 0).is_ok());
    }

    #[test]
    fn checkout_reports_total_then_nothing() {
        let mut alice = DiningCustomer::new("Alice", "123 Main St.");
        alice.add_to_cart(dish("Burger", 8), 2).unwrap();

        assert_eq!(
            alice.checkout(),
            CheckoutOutcome::Completed {
                total: 16,
                lines: 1
            }
        );
        assert_eq!(alice.checkout(), CheckoutOutcome::NothingToCheckout);
    }

    #[test]
    fn removing_unknown_dish_reports_item_not_found() {
        let mut alice = DiningCustomer::new("Alice", "123 Main St.");
        let err = alice.remove_from_cart("Sushi", 1).unwrap_err();
        assert_eq!(err, DomainError::ItemNotFound("Sushi".to_string()));
    }
}
