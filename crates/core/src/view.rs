//! Display models for the cart.
//!
//! A [`CartView`] is a pure function of cart state: building one has no
//! side effects and the same cart always yields the same view, so UI
//! layers can rebuild it after every mutation. Amounts are pre-formatted
//! with the ₹ glyph and no decimal places.

use crate::cart::{Cart, LineItem};

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            subtotal: "₹0".to_string(),
            tax: "₹0".to_string(),
            total: "₹0".to_string(),
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            line_total: item.line_total().to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let summary = cart.summary();

        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            item_count: summary.total_items,
            subtotal: summary.subtotal.to_string(),
            tax: summary.tax.to_string(),
            total: summary.total.to_string(),
        }
    }
}
