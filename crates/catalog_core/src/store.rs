use std::collections::HashSet;

use crate::{Item, ItemId};

/// Items loaded for the active filter, in arrival order, unique by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultStore {
    items: Vec<Item>,
    seen: HashSet<ItemId>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.seen.contains(&id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        if !self.contains(id) {
            return None;
        }
        self.items.iter().find(|item| item.id == id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.seen.clear();
    }

    /// Page 1 of a session: drop everything and start over.
    pub fn replace(&mut self, items: Vec<Item>) -> usize {
        self.clear();
        self.append(items)
    }

    /// Appends items not seen yet, keeping the page's own order.
    /// Returns how many were added.
    pub fn append(&mut self, items: Vec<Item>) -> usize {
        let before = self.items.len();
        for item in items {
            if self.seen.insert(item.id) {
                self.items.push(item);
            }
        }
        self.items.len() - before
    }
}
