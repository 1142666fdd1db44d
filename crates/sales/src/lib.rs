//! Sales: customer shopping carts and checkout.

pub mod customer;

pub use customer::{Customer, ShoppingCart};
pub use stockbook_inventory::CheckoutOutcome;
