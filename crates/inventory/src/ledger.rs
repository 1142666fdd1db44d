use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use stockbook_core::{Aggregate, AggregateRoot, DomainError, DomainResult, Entity, LedgerId};
use stockbook_events::Event;

use crate::item::StockItem;

/// Current holding of one item within one ledger.
///
/// A present entry always has `quantity > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry<I: StockItem> {
    item: Arc<I>,
    quantity: i64,
}

impl<I: StockItem> LedgerEntry<I> {
    pub fn item(&self) -> &Arc<I> {
        &self.item
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// `quantity × unit_price` in the smallest currency unit.
    pub fn value(&self) -> u128 {
        self.quantity as u128 * self.item.unit_price() as u128
    }
}

/// Aggregate root: InventoryLedger.
///
/// Maps item identity to a non-negative quantity. The total value is always
/// recomputed from the entries, never cached.
#[derive(Debug)]
pub struct InventoryLedger<I: StockItem> {
    id: LedgerId,
    entries: HashMap<I::Id, LedgerEntry<I>>,
    version: u64,
}

impl<I: StockItem> InventoryLedger<I> {
    pub fn new() -> Self {
        Self::with_id(LedgerId::new())
    }

    pub fn with_id(id: LedgerId) -> Self {
        Self {
            id,
            entries: HashMap::new(),
            version: 0,
        }
    }

    /// Add `quantity` units of `item`. Zero is accepted and changes nothing.
    pub fn add(&mut self, item: Arc<I>, quantity: i64) -> DomainResult<()> {
        self.execute(&LedgerCommand::AddStock(AddStock {
            item,
            quantity,
            occurred_at: Utc::now(),
        }))
        .map(drop)
    }

    /// Remove up to `quantity` units; removing the held amount or more deletes
    /// the entry.
    pub fn remove(&mut self, item_id: &I::Id, quantity: i64) -> DomainResult<()> {
        self.execute(&LedgerCommand::RemoveStock(RemoveStock {
            item_id: item_id.clone(),
            quantity,
            occurred_at: Utc::now(),
        }))
        .map(drop)
    }

    /// Remove exactly `quantity` units, failing if fewer are held.
    pub fn withdraw(&mut self, item_id: &I::Id, quantity: i64) -> DomainResult<()> {
        self.execute(&LedgerCommand::WithdrawStock(WithdrawStock {
            item_id: item_id.clone(),
            quantity,
            occurred_at: Utc::now(),
        }))
        .map(drop)
    }

    /// Drop every entry. Clearing an empty ledger is a no-op.
    pub fn clear(&mut self) {
        let cmd = LedgerCommand::ClearLedger(ClearLedger {
            occurred_at: Utc::now(),
        });
        // Clearing has no failure path.
        if let Ok(events) = self.handle(&cmd) {
            for event in &events {
                self.apply(event);
            }
        }
    }

    /// Move exactly `quantity` units of an item into `other`.
    ///
    /// Both sides are validated before either is touched.
    pub fn transfer_to(
        &mut self,
        item_id: &I::Id,
        quantity: i64,
        other: &mut InventoryLedger<I>,
    ) -> DomainResult<()> {
        let now = Utc::now();
        let outgoing = self.handle(&LedgerCommand::WithdrawStock(WithdrawStock {
            item_id: item_id.clone(),
            quantity,
            occurred_at: now,
        }))?;
        let item = match self.entries.get(item_id) {
            Some(entry) => entry.item.clone(),
            None => return Err(DomainError::item_not_found(item_id)),
        };
        let incoming = other.handle(&LedgerCommand::AddStock(AddStock {
            item,
            quantity,
            occurred_at: now,
        }))?;

        for event in &outgoing {
            self.apply(event);
        }
        for event in &incoming {
            other.apply(event);
        }
        Ok(())
    }

    /// Held quantity; 0 for items never added or fully removed.
    pub fn quantity_of(&self, item_id: &I::Id) -> i64 {
        self.entries.get(item_id).map(|e| e.quantity).unwrap_or(0)
    }

    pub fn contains(&self, item_id: &I::Id) -> bool {
        self.entries.contains_key(item_id)
    }

    pub fn get(&self, item_id: &I::Id) -> Option<&LedgerEntry<I>> {
        self.entries.get(item_id)
    }

    /// Entries in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &LedgerEntry<I>> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Units across all entries. Widened so that several near-`i64::MAX`
    /// holdings cannot overflow.
    pub fn total_quantity(&self) -> i128 {
        self.entries.values().map(|e| i128::from(e.quantity)).sum()
    }

    /// Σ quantity × unit_price over current entries.
    pub fn total_value(&self) -> u128 {
        self.entries
            .values()
            .fold(0u128, |acc, e| acc.saturating_add(e.value()))
    }
}

impl<I: StockItem> Default for InventoryLedger<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: StockItem> AggregateRoot for InventoryLedger<I> {
    type Id = LedgerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddStock.
#[derive(Debug, Clone, PartialEq)]
pub struct AddStock<I: StockItem> {
    pub item: Arc<I>,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveStock (floors at zero).
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveStock<I: StockItem> {
    pub item_id: I::Id,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: WithdrawStock (exact; never floors).
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawStock<I: StockItem> {
    pub item_id: I::Id,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearLedger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearLedger {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand<I: StockItem> {
    AddStock(AddStock<I>),
    RemoveStock(RemoveStock<I>),
    WithdrawStock(WithdrawStock<I>),
    ClearLedger(ClearLedger),
}

/// Event: StockAdded.
#[derive(Debug, Clone, PartialEq)]
pub struct StockAdded<I: StockItem> {
    pub ledger_id: LedgerId,
    pub item: Arc<I>,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockRemoved (entry survives with a smaller quantity).
#[derive(Debug, Clone, PartialEq)]
pub struct StockRemoved<I: StockItem> {
    pub ledger_id: LedgerId,
    pub item_id: I::Id,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: EntryRemoved (the whole holding is gone).
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRemoved<I: StockItem> {
    pub ledger_id: LedgerId,
    pub item_id: I::Id,
    /// Quantity held right before removal.
    pub released: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LedgerCleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerCleared {
    pub ledger_id: LedgerId,
    pub entries_removed: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent<I: StockItem> {
    StockAdded(StockAdded<I>),
    StockRemoved(StockRemoved<I>),
    EntryRemoved(EntryRemoved<I>),
    LedgerCleared(LedgerCleared),
}

impl<I> Event for LedgerEvent<I>
where
    I: StockItem,
    I::Id: Send + Sync + 'static,
{
    fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::StockAdded(_) => "inventory.stock.added",
            LedgerEvent::StockRemoved(_) => "inventory.stock.removed",
            LedgerEvent::EntryRemoved(_) => "inventory.entry.removed",
            LedgerEvent::LedgerCleared(_) => "inventory.ledger.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LedgerEvent::StockAdded(e) => e.occurred_at,
            LedgerEvent::StockRemoved(e) => e.occurred_at,
            LedgerEvent::EntryRemoved(e) => e.occurred_at,
            LedgerEvent::LedgerCleared(e) => e.occurred_at,
        }
    }
}

impl<I: StockItem> Aggregate for InventoryLedger<I> {
    type Command = LedgerCommand<I>;
    type Event = LedgerEvent<I>;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            LedgerEvent::StockAdded(e) => {
                self.entries
                    .entry(e.item.id().clone())
                    .and_modify(|entry| entry.quantity += e.quantity)
                    .or_insert_with(|| LedgerEntry {
                        item: e.item.clone(),
                        quantity: e.quantity,
                    });
            }
            LedgerEvent::StockRemoved(e) => {
                if let Some(entry) = self.entries.get_mut(&e.item_id) {
                    entry.quantity -= e.quantity;
                }
            }
            LedgerEvent::EntryRemoved(e) => {
                self.entries.remove(&e.item_id);
            }
            LedgerEvent::LedgerCleared(_) => {
                self.entries.clear();
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LedgerCommand::AddStock(cmd) => self.handle_add(cmd),
            LedgerCommand::RemoveStock(cmd) => self.handle_remove(cmd),
            LedgerCommand::WithdrawStock(cmd) => self.handle_withdraw(cmd),
            LedgerCommand::ClearLedger(cmd) => self.handle_clear(cmd),
        }
    }
}

impl<I: StockItem> InventoryLedger<I> {
    fn ensure_non_negative(quantity: i64) -> DomainResult<()> {
        if quantity < 0 {
            return Err(DomainError::invalid_quantity(format!(
                "quantity cannot be negative (got {quantity})"
            )));
        }
        Ok(())
    }

    fn held(&self, item_id: &I::Id) -> DomainResult<i64> {
        self.entries
            .get(item_id)
            .map(|e| e.quantity)
            .ok_or_else(|| DomainError::item_not_found(item_id))
    }

    fn handle_add(&self, cmd: &AddStock<I>) -> DomainResult<Vec<LedgerEvent<I>>> {
        Self::ensure_non_negative(cmd.quantity)?;
        let item_id = cmd.item.id();

        if let Some(entry) = self.entries.get(item_id) {
            if *entry.item != *cmd.item {
                return Err(DomainError::conflict(format!(
                    "{item_id} is already held with different attributes"
                )));
            }
            if entry.quantity.checked_add(cmd.quantity).is_none() {
                return Err(DomainError::overflow(item_id));
            }
        }

        if cmd.quantity == 0 {
            return Ok(Vec::new());
        }

        Ok(vec![LedgerEvent::StockAdded(StockAdded {
            ledger_id: self.id,
            item: cmd.item.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveStock<I>) -> DomainResult<Vec<LedgerEvent<I>>> {
        Self::ensure_non_negative(cmd.quantity)?;
        let held = self.held(&cmd.item_id)?;

        if held <= cmd.quantity {
            return Ok(vec![self.entry_removed(&cmd.item_id, held, cmd.occurred_at)]);
        }
        if cmd.quantity == 0 {
            return Ok(Vec::new());
        }

        Ok(vec![LedgerEvent::StockRemoved(StockRemoved {
            ledger_id: self.id,
            item_id: cmd.item_id.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_withdraw(&self, cmd: &WithdrawStock<I>) -> DomainResult<Vec<LedgerEvent<I>>> {
        Self::ensure_non_negative(cmd.quantity)?;
        let held = self.held(&cmd.item_id)?;

        if held < cmd.quantity {
            return Err(DomainError::insufficient(&cmd.item_id, cmd.quantity, held));
        }
        if held == cmd.quantity {
            return Ok(vec![self.entry_removed(&cmd.item_id, held, cmd.occurred_at)]);
        }
        if cmd.quantity == 0 {
            return Ok(Vec::new());
        }

        Ok(vec![LedgerEvent::StockRemoved(StockRemoved {
            ledger_id: self.id,
            item_id: cmd.item_id.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_clear(&self, cmd: &ClearLedger) -> DomainResult<Vec<LedgerEvent<I>>> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![LedgerEvent::LedgerCleared(LedgerCleared {
            ledger_id: self.id,
            entries_removed: self.entries.len(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn entry_removed(
        &self,
        item_id: &I::Id,
        released: i64,
        occurred_at: DateTime<Utc>,
    ) -> LedgerEvent<I> {
        LedgerEvent::EntryRemoved(EntryRemoved {
            ledger_id: self.id,
            item_id: item_id.clone(),
            released,
            occurred_at,
        })
    }
}
