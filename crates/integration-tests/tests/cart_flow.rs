//! Per-session carts: merging, stock limits, isolation.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::json;

use openbasket_core::model::Cart;
use openbasket_core::types::{Price, ProductId};
use openbasket_core::wire::ErrorBody;
use openbasket_integration_tests::TestServer;

async fn login(client: &reqwest::Client, server: &TestServer, email: &str) {
    let response = client
        .post(server.url("/auth/login"))
        .json(&json!({"email": email}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

async fn register_and_login(client: &reqwest::Client, server: &TestServer, name: &str, email: &str) {
    let response = client
        .post(server.url("/auth/register"))
        .json(&json!({"name": name, "email": email}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    login(client, server, email).await;
}

#[tokio::test]
async fn cart_routes_require_a_session() {
    let server = TestServer::spawn().await;
    let client = server.http_client();

    for (method, path) in [
        (reqwest::Method::GET, "/cart"),
        (reqwest::Method::POST, "/cart/add"),
        (reqwest::Method::POST, "/cart/update"),
        (reqwest::Method::POST, "/cart/remove"),
        (reqwest::Method::POST, "/cart/clear"),
    ] {
        let response = client
            .request(method, server.url(path))
            .json(&json!({"product_id": 1, "quantity": 1}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn add_merges_lines_and_totals_follow() {
    let server = TestServer::spawn().await;
    let client = server.http_client();
    register_and_login(&client, &server, "Alice", "alice@x.com").await;

    client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 1, "quantity": 1}))
        .send()
        .await
        .unwrap();

    let cart: Cart = client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 2, "quantity": 2}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(cart.items().len(), 2);
    // Laptop $1200 + 2 x Shoes $50
    assert_eq!(cart.total(), Price::from(1300));

    // Adding the same product again merges into the existing line.
    let cart: Cart = client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 2, "quantity": 3}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.line(ProductId::new(2)).unwrap().quantity(), 5);
    assert_eq!(cart.total_quantity(), 6);
}

#[tokio::test]
async fn update_remove_and_clear() {
    let server = TestServer::spawn().await;
    let client = server.http_client();
    register_and_login(&client, &server, "Alice", "alice@x.com").await;

    client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 1, "quantity": 2}))
        .send()
        .await
        .unwrap();
    client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 2, "quantity": 2}))
        .send()
        .await
        .unwrap();

    let cart: Cart = client
        .post(server.url("/cart/update"))
        .json(&json!({"product_id": 1, "quantity": 5}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity(), 5);

    let cart: Cart = client
        .post(server.url("/cart/remove"))
        .json(&json!({"product_id": 2}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(cart.line(ProductId::new(2)).is_none());

    let cart: Cart = client
        .post(server.url("/cart/clear"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(cart.is_empty());
}

#[tokio::test]
async fn zero_quantity_is_rejected() {
    let server = TestServer::spawn().await;
    let client = server.http_client();
    register_and_login(&client, &server, "Alice", "alice@x.com").await;

    let response = client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 1, "quantity": 0}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let server = TestServer::spawn().await;
    let client = server.http_client();
    register_and_login(&client, &server, "Alice", "alice@x.com").await;

    let response = client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 99, "quantity": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quantities_are_capped_by_stock() {
    let server = TestServer::spawn().await;
    let client = server.http_client();
    register_and_login(&client, &server, "Alice", "alice@x.com").await;

    // Laptop stock is 10.
    let response = client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 1, "quantity": 11}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "Insufficient stock: 10 available");

    // The limit also applies to the merged line quantity.
    client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 1, "quantity": 8}))
        .send()
        .await
        .unwrap();
    let response = client
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 1, "quantity": 3}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = client
        .post(server.url("/cart/update"))
        .json(&json!({"product_id": 1, "quantity": 11}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn carts_are_isolated_per_user() {
    let server = TestServer::spawn().await;

    let alice = server.http_client();
    register_and_login(&alice, &server, "Alice", "alice@x.com").await;
    alice
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 1, "quantity": 1}))
        .send()
        .await
        .unwrap();

    let bob = server.http_client();
    register_and_login(&bob, &server, "Bob", "bob@x.com").await;

    let cart: Cart = bob
        .get(server.url("/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(cart.is_empty());

    let cart: Cart = alice
        .get(server.url("/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart.total_quantity(), 1);
}

#[tokio::test]
async fn deleting_a_product_empties_it_from_carts() {
    let server = TestServer::spawn().await;

    let alice = server.http_client();
    register_and_login(&alice, &server, "Alice", "alice@x.com").await;
    alice
        .post(server.url("/cart/add"))
        .json(&json!({"product_id": 1, "quantity": 1}))
        .send()
        .await
        .unwrap();

    let admin = server.http_client();
    login(&admin, &server, "admin@example.com").await;
    let response = admin
        .delete(server.url("/products/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cart: Cart = alice
        .get(server.url("/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(cart.is_empty());
}
