//! Name-keyed inventory with whole-inventory persistence

mod item;
pub mod store;

use std::collections::HashMap;

use log::info;

use crate::error::{Error, Result};

pub use self::item::Item;
pub use self::store::{BincodeFileStore, InventoryStore, MemoryStore};

/// Items keyed by name, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory, rejecting repeated names
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut inventory = Self::new();
        for item in items {
            inventory.add(item)?;
        }
        Ok(inventory)
    }

    pub fn add(&mut self, item: Item) -> Result<()> {
        if self.index.contains_key(&item.name) {
            return Err(Error::DuplicateKey(item.name));
        }
        self.index.insert(item.name.clone(), self.items.len());
        info!("{} added", item.name);
        self.items.push(item);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Sets amount and price of an existing item
    pub fn update(&mut self, name: &str, amount: i64, price: f64) -> Result<&Item> {
        let &i = self
            .index
            .get(name)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))?;
        let item = &mut self.items[i];
        item.amount = amount;
        item.price = price;
        Ok(item)
    }

    pub fn remove(&mut self, name: &str) -> Result<Item> {
        let i = self
            .index
            .remove(name)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))?;
        let item = self.items.remove(i);
        for idx in self.index.values_mut() {
            if *idx > i {
                *idx -= 1;
            }
        }
        info!("{} removed", name);
        Ok(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `amount * price` over all items
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(Item::value).sum()
    }
}
