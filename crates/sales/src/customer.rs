use std::sync::Arc;

use stockbook_core::{CustomerId, DomainResult, Sku};
use stockbook_inventory::{Cart, CheckoutOutcome, QuantityPolicy};
use stockbook_products::Product;

/// Cart of products owned by one customer.
pub type ShoppingCart = Cart<Product>;

/// A shopper with contact details and a cart.
#[derive(Debug)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    cart: ShoppingCart,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, policy: QuantityPolicy) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            email: email.into(),
            cart: ShoppingCart::new(policy),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product: Arc<Product>, quantity: i64) -> DomainResult<()> {
        let sku = product.sku().clone();
        self.cart.add(product, quantity).inspect_err(|err| {
            tracing::warn!(customer_id = %self.id, %sku, quantity, error = %err, "add to cart rejected");
        })
    }

    pub fn remove_from_cart(&mut self, sku: &Sku, quantity: i64) -> DomainResult<()> {
        self.cart.remove(sku, quantity).inspect_err(|err| {
            tracing::warn!(customer_id = %self.id, %sku, quantity, error = %err, "remove from cart rejected");
        })
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

    fn product(sku: &str, name: &str, price: u64) -> Arc<Product> {
        Arc::new(Product::new(Sku::parse(sku).unwrap(), name, price).unwrap())
    }

    fn customer() -> Customer {
        Customer::new("John Doe", "john.doe@example.com", QuantityPolicy::NonNegative)
    }

    #[test]
    fn keyboard_and_mouse_checkout_totals_110() {
        let keyboard = product("KB-01", "Keyboard", 50);
        let mouse = product("MS-01", "Mouse", 30);
        let mut customer = customer();

        customer.add_to_cart(keyboard, 1).unwrap();
        customer.add_to_cart(mouse, 2).unwrap();
        assert_eq!(customer.cart().total(), 110);

        assert_eq!(
            customer.checkout(),
            CheckoutOutcome::Completed {
                total: 110,
                lines: 2
            }
        );
        assert_eq!(customer.cart().total(), 0);
    }

    #[test]
    fn rejected_operations_after_checkout_leave_cart_empty() {
        let keyboard = product("KB-01", "Keyboard", 50);
        let mouse = product("MS-01", "Mouse", 30);
        let mut customer = customer();
        customer.add_to_cart(keyboard.clone(), 1).unwrap();
        customer.checkout();

        let err = customer.add_to_cart(keyboard, -1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuantity(_)));

        let err = customer.remove_from_cart(mouse.sku(), 3).unwrap_err();
        assert!(matches!(err, DomainError::ItemNotFound(_)));

        assert_eq!(customer.checkout(), CheckoutOutcome::NothingToCheckout);
    }

    #[test]
    fn zero_quantity_add_follows_policy() {
        let mouse = product("MS-01", "Mouse", 30);

        let mut lenient = customer();
        assert!(lenient.add_to_cart(mouse.clone(), 0).is_ok());
        assert!(lenient.cart().ledger().is_empty());

        let mut strict = Customer::new("Jane", "jane@example.com", QuantityPolicy::StrictlyPositive);
        assert!(strict.add_to_cart(mouse, 0).is_err());
    }

    #[test]
    fn customers_get_distinct_ids() {
        assert_ne!(customer().id(), customer().id());
    }
}
