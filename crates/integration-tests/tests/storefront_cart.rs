//! End-to-end cart and navigation tests against the in-process storefront.
//!
//! Run with: cargo test -p jungle-magic-integration-tests

use axum::http::StatusCode;
use jungle_magic_integration_tests::{TestClient, TestResponse};

/// Number of rendered cart lines on the cart page.
fn cart_lines(page: &TestResponse) -> usize {
    page.body.matches("class=\"cart-line\"").count()
}

/// Badge markup as rendered in the header.
fn badge(count: usize) -> String {
    format!("<span id=\"cart-count\">{count}</span>")
}

async fn add_from_grid(client: &mut TestClient, product_id: u32) -> TestResponse {
    client
        .post_form(
            "/cart/add",
            &format!("product_id={product_id}&quantity=1&return_to=%2F"),
        )
        .await
}

// ============================================================================
// Cart Scenarios
// ============================================================================

#[tokio::test]
async fn test_same_product_twice_merges_into_one_line() {
    let mut client = TestClient::new();

    add_from_grid(&mut client, 1).await;
    add_from_grid(&mut client, 1).await;

    let page = client.get("/cart").await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(cart_lines(&page), 1);
    assert!(page.body.contains("Quantity: 2"));
    assert!(page.body.contains("Subtotal: $50.00"));
    assert!(page.body.contains("Total: $50.00"));
}

#[tokio::test]
async fn test_distinct_products_listed_in_add_order_with_badge_count() {
    let mut client = TestClient::new();

    add_from_grid(&mut client, 1).await;
    add_from_grid(&mut client, 2).await;

    let page = client.get("/cart").await;
    assert_eq!(cart_lines(&page), 2);
    let first = page.body.find("data-product-id=\"1\"").expect("line 1");
    let second = page.body.find("data-product-id=\"2\"").expect("line 2");
    assert!(first < second);
    assert!(page.body.contains(&badge(2)));
}

#[tokio::test]
async fn test_product_detail_add_chosen_quantity_lands_on_cart() {
    let mut client = TestClient::new();

    let detail = client.get("/product/3").await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Product 3"));
    assert!(detail.body.contains("action=\"/product/3\""));

    let response = client.post_form("/product/3", "quantity=4").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), Some("/cart"));

    let page = client.get("/cart").await;
    assert_eq!(cart_lines(&page), 1);
    assert!(page.body.contains("data-product-id=\"3\""));
    assert!(page.body.contains("Quantity: 4"));
    assert!(page.body.contains("Total: $100.00"));
}

#[tokio::test]
async fn test_empty_cart_page() {
    let mut client = TestClient::new();

    let page = client.get("/cart").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Your cart is empty."));
    assert!(!page.body.contains("Total:"));
    assert!(page.body.contains(&badge(0)));
}

#[tokio::test]
async fn test_grid_and_detail_adds_merge() {
    let mut client = TestClient::new();

    add_from_grid(&mut client, 5).await;
    client.post_form("/product/5", "quantity=4").await;
    add_from_grid(&mut client, 2).await;

    let page = client.get("/cart").await;
    assert_eq!(cart_lines(&page), 2);
    assert!(page.body.contains("Quantity: 5"));
    assert!(page.body.contains("Total: $150.00"));
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_collections_always_four_tiles() {
    let mut client = TestClient::new();

    let page = client.get("/collections").await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body.matches("class=\"collection-tile\"").count(), 4);

    add_from_grid(&mut client, 1).await;
    add_from_grid(&mut client, 4).await;

    let page = client.get("/collections").await;
    assert_eq!(page.body.matches("class=\"collection-tile\"").count(), 4);
    assert!(page.body.contains(&badge(2)));
}

#[tokio::test]
async fn test_home_page_grid_and_chrome() {
    let mut client = TestClient::new();

    let page = client.get("/").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Welcome to Jungle Magic"));
    assert!(page.body.contains("href=\"/collections\""));
    assert_eq!(page.body.matches("class=\"product-card\"").count(), 6);
    assert_eq!(page.body.matches(">Add to Cart<").count(), 6);
    assert!(page.body.contains("All rights reserved."));
    assert!(page.body.contains("href=\"/\" class=\"active\""));
}

#[tokio::test]
async fn test_active_nav_follows_page() {
    let mut client = TestClient::new();

    let page = client.get("/cart").await;
    assert!(page.body.contains("href=\"/cart\" class=\"active\""));
    assert!(!page.body.contains("href=\"/\" class=\"active\""));

    let page = client.get("/collections").await;
    assert!(page.body.contains("href=\"/collections\" class=\"active\""));
}

#[tokio::test]
async fn test_grid_add_returns_to_page() {
    let mut client = TestClient::new();

    let response = add_from_grid(&mut client, 1).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), Some("/"));

    let response = client.post_form("/cart/add", "product_id=2").await;
    assert_eq!(response.header("location"), Some("/"));
}

#[tokio::test]
async fn test_grid_add_ignores_offsite_return_to() {
    let mut client = TestClient::new();

    let response = client
        .post_form(
            "/cart/add",
            "product_id=1&return_to=https%3A%2F%2Fevil.example%2F",
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), Some("/"));
}

// ============================================================================
// Rejections
// ============================================================================

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let mut client = TestClient::new();

    assert_eq!(client.get("/product/7").await.status, StatusCode::NOT_FOUND);
    assert_eq!(client.get("/product/0").await.status, StatusCode::NOT_FOUND);
    assert_eq!(client.get("/product/abc").await.status, StatusCode::NOT_FOUND);

    let response = client.post_form("/product/42", "quantity=1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = client.post_form("/cart/add", "product_id=42").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    assert!(client.get("/cart").await.body.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_invalid_quantity_is_bad_request() {
    let mut client = TestClient::new();

    for form in ["quantity=0", "quantity=-2", "quantity=lots"] {
        let response = client.post_form("/product/1", form).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{form}");
    }

    assert!(client.get("/cart").await.body.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_grid_add_always_redirects() {
    let mut client = TestClient::new();

    let response = client
        .post_form("/cart/add", "product_id=6&return_to=%2Fcollections")
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), Some("/collections"));
    assert!(response.header("hx-trigger").is_none());

    assert_eq!(client.get("/cart/count").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let mut client = TestClient::new();
    assert_eq!(client.get("/checkout").await.status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Sessions & Infrastructure
// ============================================================================

#[tokio::test]
async fn test_carts_are_per_session() {
    let mut alice = TestClient::new();
    let mut bob = alice.new_session();

    add_from_grid(&mut alice, 1).await;

    assert!(bob.get("/cart").await.body.contains("Your cart is empty."));
    assert!(alice.get("/cart").await.body.contains("Quantity: 1"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_adds_in_one_session_all_count() {
    let mut client = TestClient::new();
    add_from_grid(&mut client, 1).await;

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let mut tab = client.clone();
            tokio::spawn(async move { add_from_grid(&mut tab, 1).await.status })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.expect("add task panicked"), StatusCode::SEE_OTHER);
    }

    let page = client.get("/cart").await;
    assert_eq!(cart_lines(&page), 1);
    assert!(page.body.contains("Quantity: 21"), "{}", page.body);
    assert!(page.body.contains(&badge(1)));
}

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();
    let response = client.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_response_headers() {
    let mut client = TestClient::new();
    let response = client.get("/").await;

    assert!(response.header("x-request-id").is_some());
    assert_eq!(response.header("x-frame-options"), Some("DENY"));
    assert!(response.header("content-security-policy").is_some());
}
