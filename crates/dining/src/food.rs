use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity};
use stockbook_inventory::StockItem;

/// A dish, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodItem {
    name: String,
    /// Price in smallest currency unit.
    price: u64,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, price: u64) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("food item name cannot be empty"));
        }
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }
}

impl Entity for FoodItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl StockItem for FoodItem {
    fn unit_price(&self) -> u64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_required() {
        let burger = FoodItem::new(" Burger ", 8).unwrap();
        assert_eq!(burger.name(), "Burger");
        assert_eq!(burger.id(), "Burger");
        assert!(FoodItem::new("", 8).is_err());
    }
}
