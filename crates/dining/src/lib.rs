//! Food delivery: restaurant menus, diner carts and the delivery service
//! that groups restaurants.

pub mod customer;
pub mod delivery;
pub mod food;
pub mod restaurant;

pub use customer::DiningCustomer;
pub use delivery::DeliveryService;
pub use food::FoodItem;
pub use restaurant::Restaurant;
