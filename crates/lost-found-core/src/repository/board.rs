//! Board
//!
//! Item cache plus the current selection. Confirmed results are applied
//! here so selection cleanup happens together with the cache mutation.

use crate::coordinator::Confirmed;
use crate::domain::{Item, ItemId};
use crate::lifetime::ViewLifetime;

use super::item_repo::ItemRepository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    repository: ItemRepository,
    selected: Option<ItemId>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(&self) -> &ItemRepository {
        &self.repository
    }

    pub fn items(&self) -> &[Item] {
        self.repository.items()
    }

    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_deref().and_then(|id| self.repository.get(id))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select an item; ids not in the cache clear the selection
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id
            .filter(|id| self.repository.contains(id))
            .map(str::to_string);
    }

    /// Apply a server-confirmed result
    pub fn apply(&mut self, confirmed: Confirmed) {
        match confirmed {
            Confirmed::Loaded(items) => {
                log::debug!("board: replacing {} cached items with {}", self.repository.len(), items.len());
                self.repository.replace_all(items);
                if let Some(id) = self.selected.as_deref() {
                    if !self.repository.contains(id) {
                        self.selected = None;
                    }
                }
            }
            Confirmed::Created(item) => {
                log::debug!("board: inserting item {}", item.id);
                self.repository.insert(item);
            }
            Confirmed::Resolved(id) | Confirmed::Deleted(id) => {
                if self.repository.remove_by_id(&id).is_none() {
                    log::debug!("board: item {} was already gone", id);
                }
                if self.selected.as_deref() == Some(id.as_str()) {
                    self.selected = None;
                }
            }
        }
    }

    /// Apply only while the view that issued the request is alive.
    /// Returns whether the result was applied.
    pub fn apply_while(&mut self, lifetime: &ViewLifetime, confirmed: Confirmed) -> bool {
        if !lifetime.is_alive() {
            log::debug!("board: dropping {} result after teardown", confirmed.label());
            return false;
        }
        self.apply(confirmed);
        true
    }
}
