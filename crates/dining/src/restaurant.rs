use std::sync::Arc;

use chrono::Utc;

use stockbook_core::{Aggregate, AggregateRoot, DomainError, DomainResult, Entity, RestaurantId};
use stockbook_events::EventJournal;
use stockbook_inventory::{
    AddStock, CheckoutOutcome, InventoryLedger, LedgerCommand, LedgerEvent, RemoveStock,
    WithdrawStock,
};

use crate::customer::DiningCustomer;
use crate::food::FoodItem;

const MENU_STREAM: &str = "dining.menu";

/// A restaurant and the stock of dishes it can serve.
#[derive(Debug)]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
    menu: InventoryLedger<FoodItem>,
    history: EventJournal<LedgerEvent<FoodItem>>,
}

impl Restaurant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RestaurantId::new(),
            name: name.into(),
            menu: InventoryLedger::new(),
            history: EventJournal::new(MENU_STREAM),
        }
    }

    pub fn id(&self) -> RestaurantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn menu(&self) -> &InventoryLedger<FoodItem> {
        &self.menu
    }

    /// Every stock movement applied to the menu, oldest first.
    pub fn stock_history(&self) -> &EventJournal<LedgerEvent<FoodItem>> {
        &self.history
    }

    pub fn add_to_menu(&mut self, item: Arc<FoodItem>, quantity: i64) -> DomainResult<()> {
        let dish = item.name().to_string();
        self.record(&LedgerCommand::AddStock(AddStock {
            item,
            quantity,
            occurred_at: Utc::now(),
        }))
        .inspect_err(|err| {
            tracing::warn!(restaurant = %self.name, %dish, quantity, error = %err, "menu add rejected");
        })
    }

    pub fn remove_from_menu(&mut self, dish: &str, quantity: i64) -> DomainResult<()> {
        self.record(&LedgerCommand::RemoveStock(RemoveStock {
            item_id: dish.to_string(),
            quantity,
            occurred_at: Utc::now(),
        }))
        .inspect_err(|err| {
            tracing::warn!(restaurant = %self.name, %dish, quantity, error = %err, "menu remove rejected");
        })
    }

    pub fn menu_quantity(&self, dish: &str) -> i64 {
        self.menu.quantity_of(&dish.to_string())
    }

    /// Value of all stock on the menu.
    pub fn total_revenue(&self) -> u128 {
        self.menu.total_value()
    }

    /// Serve a diner's whole cart from menu stock, then check the cart out.
    ///
    /// All-or-nothing: if any dish is missing, short, or listed on the menu
    /// with different attributes (e.g. price), neither the menu nor the cart
    /// changes. Lines are checked in dish-name order.
    pub fn fulfil(&mut self, customer: &mut DiningCustomer) -> DomainResult<CheckoutOutcome> {
        if customer.cart_total() == 0 {
            return Ok(CheckoutOutcome::NothingToCheckout);
        }

        let mut lines: Vec<_> = customer.cart().ledger().entries().collect();
        lines.sort_by(|a, b| a.item().id().cmp(b.item().id()));

        let now = Utc::now();
        let mut events = Vec::new();
        for entry in lines {
            if let Some(held) = self.menu.get(entry.item().id()) {
                if **held.item() != **entry.item() {
                    let err = DomainError::conflict(format!(
                        "{} is on the menu at {} but was ordered at {}",
                        entry.item().name(),
                        held.item().price(),
                        entry.item().price()
                    ));
                    tracing::warn!(
                        restaurant = %self.name,
                        customer_id = %customer.id(),
                        error = %err,
                        "order cannot be fulfilled"
                    );
                    return Err(err);
                }
            }
            let cmd = LedgerCommand::WithdrawStock(WithdrawStock {
                item_id: entry.item().id().clone(),
                quantity: entry.quantity(),
                occurred_at: now,
            });
            let planned = self.menu.handle(&cmd).inspect_err(|err| {
                tracing::warn!(
                    restaurant = %self.name,
                    customer_id = %customer.id(),
                    error = %err,
                    "order cannot be fulfilled"
                );
            })?;
            events.extend(planned);
        }

        for event in &events {
            self.menu.apply(event);
        }
        self.history.append(*self.menu.id(), events);

        let outcome = customer.checkout();
        if let CheckoutOutcome::Completed { total, lines } = outcome {
            tracing::info!(
                restaurant = %self.name,
                customer_id = %customer.id(),
                total = %total,
                lines,
                "order fulfilled"
            );
        }
        Ok(outcome)
    }

    fn record(&mut self, command: &LedgerCommand<FoodItem>) -> DomainResult<()> {
        let events = self.menu.execute(command)?;
        self.history.append(*self.menu.id(), events);
        Ok(())
    }
}
