//! Player inventory

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Maximum number of items the player can carry
pub const MAX_INVENTORY: usize = 5;

/// Ordered, fixed-capacity list of carried item names
///
/// Items are appended in pickup order and never removed. Adding an item to a
/// full inventory is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStore {
    items: SmallVec<[String; MAX_INVENTORY]>,
}

impl InventoryStore {
    pub fn new() -> Self {
        InventoryStore {
            items: SmallVec::new(),
        }
    }

    /// Append an item; returns false if the inventory was already full
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item.into());
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_INVENTORY
    }
}
