//! Wishlist membership.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use solezone_core::ProductId;

/// Direction a toggle took, so presentation can phrase its feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WishlistChange {
    Added,
    Removed,
}

/// Products the shopper has hearted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    ids: BTreeSet<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    /// Flip membership for `id`.
    pub fn toggle(&mut self, id: ProductId) -> WishlistChange {
        if self.ids.remove(&id) {
            WishlistChange::Removed
        } else {
            self.ids.insert(id);
            WishlistChange::Added
        }
    }
}
