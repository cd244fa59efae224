//! Urban Brew Core - Cart and menu domain library.
//!
//! This crate provides the domain types shared by the Urban Brew components:
//! - `client` - Order backend client and checkout flow
//! - `cli` - Terminal ordering UI
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O and no
//! HTTP clients. The cart is an explicit owned value: callers mutate it
//! through its methods and rebuild display views from the result, so there
//! is no ambient mutable state anywhere in the workspace.
//!
//! # Modules
//!
//! - [`cart`] - In-memory order cart and derived totals
//! - [`menu`] - Menu catalog with search filtering
//! - [`types`] - Prices and validated shipping addresses
//! - [`view`] - Pure display models built from cart state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod menu;
pub mod types;
pub mod view;

pub use cart::{Cart, CartSummary, LineItem};
pub use menu::{Menu, MenuCategory, MenuItem};
pub use types::{AddressError, AddressFields, Price, ShippingAddress};
pub use view::{CartItemView, CartView};
