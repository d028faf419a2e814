//! # Wishlist
//!
//! Favorited listing IDs, unique, in the order they were added.
//! Lives only for the process; nothing is persisted.

use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: Vec<String>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless it is already present.
    pub fn add(&mut self, id: &str) {
        if self.contains(id) {
            return;
        }
        debug!("Wishlist add: {}", id);
        self.ids.push(id.to_string());
    }

    /// Removes `id` if present. Remaining members keep their order.
    pub fn remove(&mut self, id: &str) {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        if self.ids.len() != before {
            debug!("Wishlist remove: {}", id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Adds `id` if absent, removes it if present. Returns whether it is
    /// now on the wishlist.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
