use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity, Sku};
use stockbook_inventory::StockItem;

/// A sellable product.
///
/// Identity is the SKU; two products with the same SKU are the same product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    sku: Sku,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
}

impl Product {
    pub fn new(sku: Sku, name: impl Into<String>, unit_price: u64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            sku,
            name,
            unit_price,
        })
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of `quantity` units.
    pub fn price_for(&self, quantity: u64) -> u128 {
        self.unit_price as u128 * quantity as u128
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl StockItem for Product {
    fn unit_price(&self) -> u64 {
        self.unit_price
    }
}
