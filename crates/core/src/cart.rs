//! Immutable cart snapshots.
//!
//! Every operation on [`Cart`] returns a fresh value and leaves the receiver
//! untouched. Callers that keep the previous snapshot can compare it with the
//! new one to detect changes.
//!
//! # Invariants
//!
//! - At most one [`CartEntry`] per [`ProductId`].
//! - Every entry has `amount >= 1`. An entry that would drop to zero is
//!   removed instead.
//! - Entries keep the order in which their products were first added.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{Product, ProductId};

/// A product plus the quantity of it currently in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    #[serde(flatten)]
    product: Product,
    amount: u64,
}

impl CartEntry {
    const fn first(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    /// The product this entry refers to.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Identifier of the product in this entry.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Quantity in the cart. Always at least 1.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }

    /// Unit price multiplied by amount, clamped to [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.times(self.amount)
    }

    fn incremented(&self) -> Self {
        Self {
            product: self.product.clone(),
            amount: self.amount.saturating_add(1),
        }
    }
}

/// An ordered, immutable collection of cart entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// The empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing entry in place (same position) or appends a
    /// new entry with amount 1.
    #[must_use]
    pub fn with_added(&self, product: &Product) -> Self {
        if self.get(product.id).is_some() {
            let entries = self
                .entries
                .iter()
                .map(|entry| {
                    if entry.id() == product.id {
                        entry.incremented()
                    } else {
                        entry.clone()
                    }
                })
                .collect();
            return Self { entries };
        }

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(CartEntry::first(product.clone()));
        Self { entries }
    }

    /// Remove one unit of the product with `id`.
    ///
    /// An entry with amount 1 is dropped. Unknown ids leave the cart
    /// unchanged.
    #[must_use]
    pub fn with_removed(&self, id: ProductId) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| {
                if entry.id() != id {
                    return Some(entry.clone());
                }
                if entry.amount <= 1 {
                    return None;
                }
                Some(CartEntry {
                    product: entry.product.clone(),
                    amount: entry.amount - 1,
                })
            })
            .collect();
        Self { entries }
    }

    /// The empty cart. Clearing twice is the same as clearing once.
    #[must_use]
    pub const fn cleared() -> Self {
        Self::new()
    }

    /// Sum of amounts across all entries.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        total_items(&self.entries)
    }

    /// Sum of line totals across all entries, clamped to [`Decimal::MAX`].
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.entries
            .iter()
            .map(CartEntry::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

/// Sum of `amount` over `entries`. Zero for an empty slice.
#[must_use]
pub fn total_items(entries: &[CartEntry]) -> u64 {
    entries
        .iter()
        .fold(0_u64, |acc, entry| acc.saturating_add(entry.amount))
}
