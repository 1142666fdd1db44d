//! End-to-end walkthroughs of the three ledger owners.
//!
//! Each scenario returns a small report so the binary can log it and tests
//! can assert on it. Rejected operations are expected along the way; they are
//! counted, not propagated.

use std::sync::Arc;

use stockbook_core::{DomainError, DomainResult, Isbn, Sku};
use stockbook_dining::{DeliveryService, DiningCustomer, FoodItem, Restaurant};
use stockbook_inventory::CheckoutOutcome;
use stockbook_library::{Book, LibraryCatalog};
use stockbook_products::Product;
use stockbook_sales::Customer;

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcommerceReport {
    pub checkout: CheckoutOutcome,
    pub rejected: usize,
    pub cart_total_after: u128,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Menu value per restaurant, in registration order.
    pub revenues: Vec<(String, u128)>,
    pub cart_total: u128,
    pub fulfilment: CheckoutOutcome,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryReport {
    pub listing: Vec<String>,
    pub rejected: usize,
    pub available_after_return: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub ecommerce: EcommerceReport,
    pub delivery: DeliveryReport,
    pub library: LibraryReport,
}

pub fn run_all(config: &AppConfig) -> DomainResult<Report> {
    Ok(Report {
        ecommerce: run_ecommerce(config)?,
        delivery: run_food_delivery(config)?,
        library: run_library()?,
    })
}

/// Keyboard and mouse checkout, then two invalid cart edits.
pub fn run_ecommerce(config: &AppConfig) -> DomainResult<EcommerceReport> {
    let keyboard = Arc::new(Product::new(Sku::parse("KB-01")?, "Keyboard", 50)?);
    let mouse = Arc::new(Product::new(Sku::parse("MS-01")?, "Mouse", 30)?);

    let mut customer = Customer::new(
        "John Doe",
        "john.doe@example.com",
        config.sales.cart_policy,
    );
    customer.add_to_cart(keyboard.clone(), 1)?;
    customer.add_to_cart(mouse.clone(), 2)?;
    let checkout = customer.checkout();

    let mut rejected = 0;
    tally(customer.add_to_cart(keyboard, -1), &mut rejected);
    tally(customer.remove_from_cart(mouse.sku(), 3), &mut rejected);

    Ok(EcommerceReport {
        checkout,
        rejected,
        cart_total_after: customer.cart().total(),
    })
}

/// Two restaurants, one diner, and a second diner whose order is fulfilled.
pub fn run_food_delivery(config: &AppConfig) -> DomainResult<DeliveryReport> {
    let burger = Arc::new(FoodItem::new("Burger", 8)?);
    let pizza = Arc::new(FoodItem::new("Pizza", 12)?);
    let pasta = Arc::new(FoodItem::new("Pasta", 10)?);

    let mut tasty = Restaurant::new("Tasty Bites");
    tasty.add_to_menu(burger.clone(), 10)?;
    tasty.add_to_menu(pizza.clone(), 5)?;

    let mut spice = Restaurant::new("Spice Delight");
    spice.add_to_menu(pizza.clone(), 8)?;
    spice.add_to_menu(pasta.clone(), 12)?;

    let mut rejected = 0;
    let mut alice =
        DiningCustomer::with_policy("Alice", "123 Main St.", config.dining.cart_policy);
    alice.add_to_cart(burger.clone(), 2)?;
    alice.add_to_cart(pizza.clone(), 3)?;
    tally(alice.add_to_cart(pasta.clone(), -2), &mut rejected);

    let mut service = DeliveryService::new();
    service.add_restaurant(tasty);
    service.add_restaurant(spice);

    if let Some(restaurant) = service.find_restaurant_by_name_mut("Tasty Bites") {
        tally(restaurant.remove_from_menu("Pizza", 6), &mut rejected);
    }
    if let Some(restaurant) = service.find_restaurant_by_name_mut("Spice Delight") {
        tally(restaurant.remove_from_menu("Burger", 1), &mut rejected);
    }

    let revenues: Vec<(String, u128)> = service
        .restaurants()
        .iter()
        .map(|r| (r.name().to_string(), r.total_revenue()))
        .collect();
    for (name, revenue) in &revenues {
        tracing::info!(restaurant = %name, revenue = %revenue, "total revenue");
    }

    let mut bob = DiningCustomer::with_policy("Bob", "9 Side Rd.", config.dining.cart_policy);
    bob.add_to_cart(pasta, 2)?;
    let fulfilment = match service.find_restaurant_by_name_mut("Spice Delight") {
        Some(restaurant) => restaurant.fulfil(&mut bob)?,
        None => return Err(DomainError::not_found("restaurant 'Spice Delight'")),
    };

    Ok(DeliveryReport {
        revenues,
        cart_total: alice.cart_total(),
        fulfilment,
        rejected,
    })
}

/// Catalogue two books, miss a lookup, lend and return one.
pub fn run_library() -> DomainResult<LibraryReport> {
    let mut catalog = LibraryCatalog::new();
    catalog.add_book(Book::new(
        Isbn::parse("978074327234")?,
        "Ghumne mech ma andho manche",
        "Aavash Bhattarai",
        "Classic",
    )?)?;
    catalog.add_book(Book::new(
        Isbn::parse("9780061120084")?,
        "To Kill a Mockingbird",
        "Harper Lee",
        "Classic",
    )?)?;

    let mut rejected = 0;
    tally(catalog.get_book_details("The Great Gatsby"), &mut rejected);

    let listing: Vec<String> = catalog
        .get_all_books()
        .iter()
        .map(|b| b.to_string())
        .collect();
    for line in &listing {
        tracing::info!(book = %line, "catalogued");
    }

    let title = "To Kill a Mockingbird";
    catalog.borrow_book(title)?;
    tally(catalog.borrow_book(title), &mut rejected);
    catalog.return_book(title)?;

    Ok(LibraryReport {
        listing,
        rejected,
        available_after_return: catalog.is_available(title)?,
    })
}

fn tally<T>(result: DomainResult<T>, rejected: &mut usize) {
    if let Err(err) = result {
        tracing::warn!(error = %err, "operation rejected");
        *rejected += 1;
    }
}
