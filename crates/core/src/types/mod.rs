//! Core value types for Urban Brew.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod price;

pub use address::{AddressError, AddressFields, ShippingAddress};
pub use price::Price;
