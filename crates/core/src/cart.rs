//! In-memory order cart.
//!
//! The cart is a plain owned value with no interior mutability: UI layers
//! call its methods from their event handlers and rebuild a [`crate::view::CartView`]
//! afterwards. Item positions are stable between mutations, so a rendered
//! index stays valid until the next add/update/remove.

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// One distinct menu item in the cart with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name, also the identity key within the cart.
    pub name: String,
    /// Price of one unit.
    pub unit_price: Price,
    /// Image reference, carried for display only.
    pub image: String,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Total for this line (`unit_price × quantity`).
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Totals derived from the current cart contents.
///
/// Never stored - recomputed from the line items on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of all line quantities.
    pub total_items: u32,
    /// Sum of all line totals.
    pub subtotal: Price,
    /// GST on the subtotal.
    pub tax: Price,
    /// `subtotal + tax`, exact integer arithmetic.
    pub total: Price,
}

/// An ordered collection of line items, unique by item name.
///
/// Created empty at session start, mutated by user-triggered operations,
/// and cleared only when an order is confirmed. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items (not total units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of an item.
    ///
    /// If an item with the same name is already in the cart its quantity is
    /// incremented; otherwise a new line is appended with quantity 1.
    pub fn add_item(&mut self, name: impl Into<String>, unit_price: Price, image: impl Into<String>) {
        let name = name.into();

        if let Some(existing) = self.items.iter_mut().find(|item| item.name == name) {
            existing.quantity += 1;
        } else {
            self.items.push(LineItem {
                name,
                unit_price,
                image: image.into(),
                quantity: 1,
            });
        }
    }

    /// Adjust the quantity of the item at `index` by `delta`.
    ///
    /// The line is removed entirely when its quantity would drop to zero or
    /// below. An out-of-bounds index is silently ignored.
    pub fn change_quantity(&mut self, index: usize, delta: i32) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };

        let quantity = i64::from(item.quantity) + i64::from(delta);
        if quantity <= 0 {
            self.items.remove(index);
        } else {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove the item at `index` unconditionally.
    ///
    /// An out-of-bounds index is silently ignored.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Compute the derived totals for the current contents.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        let total_items = self.items.iter().map(|item| item.quantity).sum();
        let subtotal: Price = self.items.iter().map(LineItem::line_total).sum();
        let tax = subtotal.tax();

        CartSummary {
            total_items,
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
