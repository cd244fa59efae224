//! Order placement API client.
//!
//! Wraps the backend's `POST /place_order` endpoint. The backend reports
//! rejections (empty cart, bad address, stock problems) as a JSON body with
//! `success: false` alongside a 4xx/5xx status, so the response body is
//! parsed regardless of the HTTP status code and only a missing or
//! malformed body counts as a failure of the round-trip itself.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use urban_brew_core::{Cart, Price, ShippingAddress};

use crate::config::OrderApiConfig;

/// Errors that can occur when talking to the order backend.
#[derive(Debug, thiserror::Error)]
pub enum OrderApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// One line of an order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

/// Request body for `POST /place_order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub cart_items: Vec<OrderLine>,
    pub total_amount: Price,
    pub address: ShippingAddress,
}

impl OrderRequest {
    /// Snapshot a cart and delivery address into an order request.
    ///
    /// `total_amount` is the cart's tax-inclusive total at the moment of the
    /// snapshot; later cart edits do not affect the request.
    #[must_use]
    pub fn from_cart(cart: &Cart, address: &ShippingAddress) -> Self {
        let cart_items = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                name: item.name.clone(),
                price: item.unit_price,
                image: item.image.clone(),
                quantity: item.quantity,
            })
            .collect();

        Self {
            cart_items,
            total_amount: cart.summary().total,
            address: address.clone(),
        }
    }
}

/// Response body from the order backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub order_id: Option<String>,
}

/// Client for the order placement API.
#[derive(Debug, Clone)]
pub struct OrderClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OrderClient {
    /// Create a new order API client.
    #[must_use]
    pub fn new(config: &OrderApiConfig) -> Self {
        let endpoint = format!(
            "{}/place_order",
            config.base_url.as_str().trim_end_matches('/')
        );

        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Submit an order and return the backend's verdict.
    ///
    /// # Errors
    ///
    /// Returns an error if the request never completes or the response body
    /// is not the expected JSON. A well-formed `success: false` body is NOT
    /// an error at this layer - the caller decides what a rejection means.
    #[instrument(skip(self, request), fields(items = request.cart_items.len()))]
    pub async fn place_order(&self, request: &OrderRequest) -> Result<OrderResponse, OrderApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse order backend response"
            );
            OrderApiError::Parse(e.to_string())
        })
    }
}
