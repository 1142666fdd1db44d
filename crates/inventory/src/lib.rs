//! Inventory ledger: quantity-by-item bookkeeping with aggregate valuation.
//!
//! Pure domain logic (no IO, no logging). Catalogs, menus and carts all own
//! an [`InventoryLedger`] and drive it through `add` / `remove`.

pub mod cart;
pub mod item;
pub mod ledger;
pub mod policy;

pub use cart::{Cart, CheckoutOutcome};
pub use item::StockItem;
pub use ledger::{
    AddStock, ClearLedger, EntryRemoved, InventoryLedger, LedgerCleared, LedgerCommand,
    LedgerEntry, LedgerEvent, RemoveStock, StockAdded, StockRemoved, WithdrawStock,
};
pub use policy::QuantityPolicy;
