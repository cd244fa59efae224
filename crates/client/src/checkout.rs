//! Checkout submission flow.
//!
//! Layers the cart-side submission rules on top of [`OrderClient`]:
//!
//! - an empty cart is refused before any network activity
//! - the cart is cleared only after the backend confirms the order
//! - a rejected or failed submission leaves the cart intact for retry
//! - the submitter always returns to idle, whichever way the round-trip
//!   ends, so checkout can be re-invoked
//!
//! `submit` borrows the cart mutably across the round-trip, which also
//! means no other code can edit the cart while an order is in flight.

use tracing::instrument;

use urban_brew_core::{Cart, ShippingAddress};

use crate::api::{OrderApiError, OrderClient, OrderRequest};

/// Errors surfaced to the user by the checkout flow.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Submission attempted with no items in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A submission is already in flight.
    #[error("an order submission is already in progress")]
    SubmissionInFlight,

    /// The backend declined the order; the message is user-facing.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed or the response was malformed.
    #[error("failed to place order: {0}")]
    Transport(#[from] OrderApiError),
}

/// A confirmed order as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Backend-assigned order identifier, when one was provided.
    pub order_id: Option<String>,
    /// User-facing confirmation message.
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Drives a single order submission round-trip at a time.
#[derive(Debug)]
pub struct CheckoutSubmitter {
    client: OrderClient,
    state: SubmitState,
}

impl CheckoutSubmitter {
    /// Create a submitter over an order API client.
    #[must_use]
    pub const fn new(client: OrderClient) -> Self {
        Self {
            client,
            state: SubmitState::Idle,
        }
    }

    /// Whether a submission round-trip is currently pending.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Submit the cart as an order to the given delivery address.
    ///
    /// On confirmation the cart is cleared and the backend's order id and
    /// message are returned. On every error the cart is left exactly as it
    /// was so the user can retry.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] if the cart has no items (checked
    ///   before any network activity)
    /// - [`CheckoutError::SubmissionInFlight`] if a submission is already
    ///   pending
    /// - [`CheckoutError::Rejected`] if the backend declined the order
    /// - [`CheckoutError::Transport`] if the round-trip itself failed
    #[instrument(skip(self, cart, address))]
    pub async fn submit(
        &mut self,
        cart: &mut Cart,
        address: &ShippingAddress,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if self.state == SubmitState::Submitting {
            return Err(CheckoutError::SubmissionInFlight);
        }

        let request = OrderRequest::from_cart(cart, address);

        self.state = SubmitState::Submitting;
        let result = self.client.place_order(&request).await;
        // Back to idle on every terminal path, success or failure.
        self.state = SubmitState::Idle;

        let response = result?;
        if response.success {
            cart.clear();
            tracing::info!(order_id = ?response.order_id, "order placed");
            Ok(OrderConfirmation {
                order_id: response.order_id,
                message: response.message,
            })
        } else {
            tracing::warn!(message = %response.message, "order rejected by backend");
            Err(CheckoutError::Rejected(response.message))
        }
    }
}
