use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use catalog_api::app::services::AppServices;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, in-memory repositories, ephemeral port.
        let app = catalog_api::app::router_with(Arc::new(AppServices::in_memory()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn category_lifecycle_create_get_update_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Create: first id on a fresh repository is 1.
    let res = client
        .post(format!("{}/categories", srv.base_url))
        .json(&json!({"name": "Electronics", "description": "Electronic Products"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Electronics");

    // Get returns the identical representation.
    let res = client
        .get(format!("{}/categories/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched, created);

    // Partial update: name only, description untouched.
    let res = client
        .patch(format!("{}/categories/1", srv.base_url))
        .json(&json!({"name": "Gadgets"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["name"], "Gadgets");
    assert_eq!(updated["description"], "Electronic Products");

    // Delete, then the id is gone.
    let res = client
        .delete(format!("{}/categories/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client
        .get(format!("{}/categories/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_category_with_empty_name_is_rejected() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(format!("{}/categories", srv.base_url))
        .json(&json!({"name": "", "description": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn product_creation_defaults_and_image_validation() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&json!({
            "name": "Test Product",
            "price": {"amount": 100.0, "currency": "USD"},
            "category_id": 1,
            "image_urls": ["http://example.com/image.jpg"],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["price"]["amount"], 100.0);
    assert_eq!(created["image_urls"][0], "http://example.com/image.jpg");

    // Omitted image_urls yields an empty list, not null.
    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&json!({"name": "Bare", "price": {"amount": 1.0}}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let bare: serde_json::Value = res.json().await.unwrap();
    assert_eq!(bare["image_urls"], json!([]));
    assert_eq!(bare["price"]["currency"], "USD");
    assert_eq!(bare["category_id"], 0);

    // An image URL without a scheme+host is rejected.
    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&json!({
            "name": "Broken",
            "price": {"amount": 1.0},
            "image_urls": ["example.com/image.jpg"],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_on_unknown_id_references_it_in_the_message() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .patch(format!("{}/categories/999", srv.base_url))
        .json(&json!({"name": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn non_integer_ids_are_rejected() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/products/abc", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn category_assignment_is_single_shot() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for name in ["Electronics", "Books"] {
        let res = client
            .post(format!("{}/categories", srv.base_url))
            .json(&json!({"name": name}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .post(format!("{}/products", srv.base_url))
        .json(&json!({"name": "Test Product", "price": {"amount": 100.0}}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // First assignment succeeds.
    let res = client
        .post(format!("{}/products/1/category", srv.base_url))
        .json(&json!({"category_id": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let assigned: serde_json::Value = res.json().await.unwrap();
    assert_eq!(assigned["category_id"], 1);

    // Second assignment conflicts and leaves the product unchanged.
    let res = client
        .post(format!("{}/products/1/category", srv.base_url))
        .json(&json!({"category_id": 2}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = client
        .get(format!("{}/products/1", srv.base_url))
        .send()
        .await
        .unwrap();
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(product["category_id"], 1);
}

#[tokio::test]
async fn category_with_products_cannot_be_deleted() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/categories", srv.base_url))
        .json(&json!({"name": "Electronics"}))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{}/products", srv.base_url))
        .json(&json!({"name": "P", "price": {"amount": 1.0}, "category_id": 1}))
        .send()
        .await
        .unwrap();

    let res = client
        .delete(format!("{}/categories/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Once the product is gone the category may be deleted.
    let res = client
        .delete(format!("{}/products/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client
        .delete(format!("{}/categories/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn add_image_appends_to_the_list() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/products", srv.base_url))
        .json(&json!({
            "name": "Test Product",
            "price": {"amount": 1.0},
            "image_urls": ["http://example.com/a.jpg"],
        }))
        .send()
        .await
        .unwrap();

    let res = client
        .post(format!("{}/products/1/images", srv.base_url))
        .json(&json!({"url": "https://example.com/b.png"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        product["image_urls"],
        json!(["http://example.com/a.jpg", "https://example.com/b.png"])
    );

    let res = client
        .post(format!("{}/products/1/images", srv.base_url))
        .json(&json!({"url": "not-a-url"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
