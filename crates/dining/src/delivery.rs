use stockbook_core::RestaurantId;

use crate::restaurant::Restaurant;

/// Registry of restaurants a delivery platform routes orders to.
#[derive(Debug, Default)]
pub struct DeliveryService {
    restaurants: Vec<Restaurant>,
}

impl DeliveryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_restaurant(&mut self, restaurant: Restaurant) -> RestaurantId {
        let id = restaurant.id();
        tracing::debug!(restaurant = %restaurant.name(), %id, "restaurant registered");
        self.restaurants.push(restaurant);
        id
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// First restaurant whose name matches exactly.
    pub fn find_restaurant_by_name(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.name() == name)
    }

    pub fn find_restaurant_by_name_mut(&mut self, name: &str) -> Option<&mut Restaurant> {
        self.restaurants.iter_mut().find(|r| r.name() == name)
    }

    pub fn get(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id() == id)
    }
}
