//! Process-local cart container.
//!
//! Holds the current [`Cart`] snapshot and replaces it wholesale on every
//! mutation. Each mutation runs under the store's lock, so add, remove and
//! clear never interleave, and readers only ever see complete snapshots.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cart::Cart;
use crate::types::{Product, ProductId};

/// Shared owner of the current cart snapshot.
///
/// Cheaply cloneable; clones share the same underlying cart.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    current: Arc<Mutex<Arc<Cart>>>,
}

impl CartStore {
    /// Create a store holding the empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Cart> {
        Arc::clone(&self.lock())
    }

    /// Add one unit of `product` and return the new snapshot.
    pub fn add(&self, product: &Product) -> Arc<Cart> {
        self.replace(|cart| cart.with_added(product))
    }

    /// Remove one unit of the product with `id` and return the new snapshot.
    pub fn remove(&self, id: ProductId) -> Arc<Cart> {
        self.replace(|cart| cart.with_removed(id))
    }

    /// Empty the cart and return the new snapshot.
    pub fn clear(&self) -> Arc<Cart> {
        self.replace(|_| Cart::cleared())
    }

    fn replace(&self, next: impl FnOnce(&Cart) -> Cart) -> Arc<Cart> {
        let mut guard = self.lock();
        let updated = Arc::new(next(&guard));
        *guard = Arc::clone(&updated);
        updated
    }

    // A poisoned lock still holds a whole snapshot: the swap above is a
    // single pointer assignment.
    fn lock(&self) -> MutexGuard<'_, Arc<Cart>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
