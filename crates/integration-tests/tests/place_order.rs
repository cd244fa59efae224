//! End-to-end checkout tests against the stub order backend.

use axum::http::StatusCode;
use serde_json::json;

use urban_brew_client::{CheckoutError, CheckoutSubmitter, OrderApiConfig, OrderClient};
use urban_brew_core::{AddressFields, Cart, Price, ShippingAddress};
use urban_brew_integration_tests::{StubBackend, StubReply, spawn_backend};

fn submitter_for(backend: &StubBackend) -> CheckoutSubmitter {
    let config = OrderApiConfig::new(&backend.base_url()).expect("stub base url");
    CheckoutSubmitter::new(OrderClient::new(&config))
}

fn sample_cart() -> Cart {
    let mut cart = Cart::new();
    cart.add_item("Cappuccino", Price::new(100), "/static/images/cappuccino.jpg");
    cart.add_item("Cappuccino", Price::new(100), "/static/images/cappuccino.jpg");
    cart.add_item("Masala Chai", Price::new(50), "/static/images/masala-chai.jpg");
    cart
}

fn sample_address() -> ShippingAddress {
    ShippingAddress::parse(&AddressFields {
        name: "Asha Patel".to_string(),
        phone: "9876543210".to_string(),
        address_line: "14 MG Road".to_string(),
        city: "Anand".to_string(),
        pincode: "388001".to_string(),
    })
    .expect("valid address fields")
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_accepted_order_clears_cart_and_reports_id() {
    let backend = spawn_backend(StubReply::Json(
        StatusCode::OK,
        json!({
            "success": true,
            "message": "Order placed successfully!",
            "order_id": "42"
        }),
    ))
    .await;

    let mut submitter = submitter_for(&backend);
    let mut cart = sample_cart();

    let confirmation = submitter
        .submit(&mut cart, &sample_address())
        .await
        .expect("order should be accepted");

    assert_eq!(confirmation.order_id.as_deref(), Some("42"));
    assert_eq!(confirmation.message, "Order placed successfully!");
    assert!(cart.is_empty(), "cart must be cleared on confirmation");
    assert!(!submitter.is_submitting());
}

#[tokio::test]
async fn test_request_body_matches_wire_contract() {
    let backend = spawn_backend(StubReply::Json(
        StatusCode::OK,
        json!({"success": true, "message": "ok", "order_id": "1"}),
    ))
    .await;

    let mut submitter = submitter_for(&backend);
    let mut cart = sample_cart();

    submitter
        .submit(&mut cart, &sample_address())
        .await
        .expect("order should be accepted");

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        json!({
            "cart_items": [
                {
                    "name": "Cappuccino",
                    "price": 100,
                    "image": "/static/images/cappuccino.jpg",
                    "quantity": 2
                },
                {
                    "name": "Masala Chai",
                    "price": 50,
                    "image": "/static/images/masala-chai.jpg",
                    "quantity": 1
                }
            ],
            "total_amount": 263,
            "address": "Asha Patel, 9876543210, 14 MG Road, Anand - 388001"
        })
    );
}

// ============================================================================
// Failure Paths
// ============================================================================

#[tokio::test]
async fn test_rejected_order_preserves_cart_and_surfaces_message() {
    let backend = spawn_backend(StubReply::Json(
        StatusCode::BAD_REQUEST,
        json!({"success": false, "message": "Out of stock"}),
    ))
    .await;

    let mut submitter = submitter_for(&backend);
    let mut cart = sample_cart();
    let before = cart.clone();

    let err = submitter
        .submit(&mut cart, &sample_address())
        .await
        .expect_err("order should be rejected");

    match err {
        CheckoutError::Rejected(message) => assert_eq!(message, "Out of stock"),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(cart, before, "cart must be preserved on rejection");
    assert!(!submitter.is_submitting());
}

#[tokio::test]
async fn test_rejected_submission_can_be_retried() {
    let backend = spawn_backend(StubReply::Json(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"success": false, "message": "Failed to save order. Please try again."}),
    ))
    .await;

    let mut submitter = submitter_for(&backend);
    let mut cart = sample_cart();

    for _ in 0..2 {
        let err = submitter
            .submit(&mut cart, &sample_address())
            .await
            .expect_err("order should be rejected");
        assert!(
            matches!(err, CheckoutError::Rejected(_)),
            "retry must reach the backend again, got {err:?}"
        );
    }

    assert_eq!(backend.requests().len(), 2);
}

#[tokio::test]
async fn test_empty_cart_never_reaches_backend() {
    let backend = spawn_backend(StubReply::Json(
        StatusCode::OK,
        json!({"success": true, "message": "ok"}),
    ))
    .await;

    let mut submitter = submitter_for(&backend);
    let mut cart = Cart::new();

    let err = submitter
        .submit(&mut cart, &sample_address())
        .await
        .expect_err("empty cart must be refused");

    assert!(matches!(err, CheckoutError::EmptyCart));
    assert!(backend.requests().is_empty(), "no request may be sent");
}

#[tokio::test]
async fn test_non_json_response_is_transport_error() {
    let backend = spawn_backend(StubReply::Text(
        StatusCode::INTERNAL_SERVER_ERROR,
        "<html>Internal Server Error</html>",
    ))
    .await;

    let mut submitter = submitter_for(&backend);
    let mut cart = sample_cart();
    let before = cart.clone();

    let err = submitter
        .submit(&mut cart, &sample_address())
        .await
        .expect_err("malformed body must fail");

    assert!(matches!(err, CheckoutError::Transport(_)));
    assert_eq!(cart, before, "cart must be preserved on transport failure");
    assert!(!submitter.is_submitting());
}
