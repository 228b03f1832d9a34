//! Item Repository
//!
//! Client-side cache of the server's item list. Mutated only after the
//! server has confirmed the change.

use crate::domain::Item;

/// Ordered item cache, newest posts first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRepository {
    items: Vec<Item>,
}

impl ItemRepository {
    pub fn new() -> Self {
        Self::default()
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

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replace everything with an authoritative server listing
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Prepend a server-confirmed item
    pub fn insert(&mut self, item: Item) {
        self.items.insert(0, item);
    }

    /// Remove the item with this id; unknown ids are a no-op
    pub fn remove_by_id(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}
