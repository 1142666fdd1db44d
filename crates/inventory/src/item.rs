use stockbook_core::Entity;

/// Something a ledger can hold: an identity plus a unit price.
///
/// Prices are in the smallest currency unit (e.g. cents), so they are
/// non-negative by construction. Implementors are immutable once built; a
/// price change means a new item.
pub trait StockItem: Entity + Clone + PartialEq + core::fmt::Debug + Send + Sync + 'static {
    fn unit_price(&self) -> u64;
}
