//! Urban Brew Client - Order backend client and checkout flow.
//!
//! # Architecture
//!
//! - [`api`] wraps the order backend's single `POST /place_order` endpoint
//!   with `reqwest` and typed wire structs
//! - [`checkout`] layers the submission rules on top: empty-cart guard,
//!   clear-on-confirmation, keep-the-cart-on-failure
//! - [`config`] loads the backend base URL from the environment
//!
//! The backend is the source of truth for order acceptance - this crate
//! never decides an order succeeded on its own.
//!
//! # Example
//!
//! ```rust,ignore
//! use urban_brew_client::{CheckoutSubmitter, OrderApiConfig, OrderClient};
//! use urban_brew_core::{AddressFields, Cart, Price, ShippingAddress};
//!
//! let config = OrderApiConfig::from_env()?;
//! let mut submitter = CheckoutSubmitter::new(OrderClient::new(&config));
//!
//! let mut cart = Cart::new();
//! cart.add_item("Cappuccino", Price::new(100), "/img/cappuccino.jpg");
//!
//! let address = ShippingAddress::parse(&fields)?;
//! let confirmation = submitter.submit(&mut cart, &address).await?;
//! // cart is now empty; confirmation.order_id identifies the order
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod checkout;
pub mod config;

pub use api::{OrderApiError, OrderClient, OrderLine, OrderRequest, OrderResponse};
pub use checkout::{CheckoutError, CheckoutSubmitter, OrderConfirmation};
pub use config::{ConfigError, OrderApiConfig};
