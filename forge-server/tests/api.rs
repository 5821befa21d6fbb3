//! Router-level API tests
//!
//! Exercises the HTTP surface against a freshly seeded state with the
//! WooCommerce adapter unconfigured.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use forge_server::core::{Config, ServerState, build_app};

fn test_config() -> Config {
    Config {
        http_port: 0,
        environment: "test".to_string(),
        woocommerce: None,
    }
}

fn test_app() -> Router {
    let state = ServerState::initialize(&test_config());
    build_app().with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is not JSON")
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Find a seeded product id by search term
async fn find_product(app: &Router, query: &str) -> Value {
    let (status, body) = get(app, &format!("/api/products?search={query}")).await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().expect("products should be an array");
    assert!(!products.is_empty(), "no product matches {query}");
    products[0].clone()
}

#[tokio::test]
async fn test_list_products_by_category() {
    let app = test_app();

    let (status, body) = get(&app, "/api/products?category=cpu").await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().unwrap();
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| p["category"] == "cpu"));
}

#[tokio::test]
async fn test_list_products_filters_are_conjunctive() {
    let app = test_app();

    let (status, body) = get(
        &app,
        "/api/products?category=cpu&brand=AMD&maxPrice=8000000",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().unwrap();
    assert!(!products.is_empty());
    for product in products {
        assert_eq!(product["category"], "cpu");
        assert_eq!(product["brand"], "AMD");
        assert!(product["price"].as_i64().unwrap() <= 8_000_000);
    }
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let app = test_app();
    let (status, _) = get(&app, "/api/products?category=flux-capacitor").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_product_by_id_and_missing() {
    let app = test_app();

    let seeded = find_product(&app, "14700K").await;
    let id = seeded["id"].as_str().unwrap();

    let (status, body) = get(&app, &format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], *id);
    assert_eq!(body["socket"], "lga1700");

    let (status, body) = get(&app, "/api/products/no-such-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_build_create_get_patch_roundtrip() {
    let app = test_app();
    let cpu = find_product(&app, "7700X").await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/builds",
        json!({
            "name": "First rig",
            "components": { "cpu": cpu["id"] },
            "totalPrice": cpu["price"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "First rig");
    assert!(created["createdAt"].is_string());

    let (status, fetched) = get(&app, &format!("/api/builds/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Partial update: rename only, components and total stay put
    let (status, patched) = send_json(
        &app,
        "PATCH",
        &format!("/api/builds/{id}"),
        json!({ "name": "Renamed rig" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "Renamed rig");
    assert_eq!(patched["components"], created["components"]);
    assert_eq!(patched["totalPrice"], created["totalPrice"]);
    assert_eq!(patched["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn test_build_validation_and_missing() {
    let app = test_app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/builds",
        json!({ "name": "", "totalPrice": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/builds",
        json!({ "name": "Negative", "totalPrice": -1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app,
        "PATCH",
        "/api/builds/no-such-build",
        json!({ "name": "Ghost" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The failed update must not have created anything
    let (status, _) = get(&app, "/api/builds/no-such-build").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_compatibility_socket_mismatch() {
    let app = test_app();
    let intel_cpu = find_product(&app, "14700K").await;
    let am5_board = find_product(&app, "Tomahawk").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/compatibility",
        json!({
            "components": {
                "cpu": intel_cpu["id"],
                "mainboard": am5_board["id"]
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["compatibility"]["cpuMainboard"], false);
    assert!(!body["compatibility"]["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_compatibility_cpu_and_psu_end_to_end() {
    let app = test_app();
    // Ryzen 7 7700X: socket am5, draw 105W; RM650e: capacity 650W
    let cpu = find_product(&app, "7700X").await;
    let psu = find_product(&app, "RM650e").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/compatibility",
        json!({
            "components": {
                "cpu": cpu["id"],
                "psu": psu["id"]
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalWattage"], 105);
    // 105W of draw against 650W capacity is comfortably adequate
    assert_eq!(body["compatibility"]["psuWattage"], "adequate");
    assert_eq!(body["compatibility"]["cpuMainboard"], true);
    assert_eq!(body["compatibility"]["ramMainboard"], true);
}

#[tokio::test]
async fn test_compatibility_matching_sockets() {
    let app = test_app();
    let cpu = find_product(&app, "7700X").await;
    let board = find_product(&app, "Tomahawk").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/compatibility",
        json!({
            "components": {
                "cpu": cpu["id"],
                "mainboard": board["id"]
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["compatibility"]["cpuMainboard"], true);
    assert!(body["compatibility"]["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_woocommerce_status_unconfigured() {
    let app = test_app();

    let (status, body) = get(&app, "/api/woocommerce/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["woocommerce_configured"], false);
    assert_eq!(body["has_consumer_key"], false);
    assert_eq!(body["has_consumer_secret"], false);
    assert!(body["api_url"].is_null());
}

#[tokio::test]
async fn test_woocommerce_order_unconfigured_is_rejected() {
    let app = test_app();
    let cpu = find_product(&app, "7700X").await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/woocommerce/order",
        json!({
            "components": [cpu["id"]],
            "customerInfo": {
                "first_name": "An",
                "last_name": "Nguyen",
                "email": "an@example.com",
                "phone": "0900000000"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "not_configured");
}

#[tokio::test]
async fn test_health_reports_seeded_catalog() {
    let app = test_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["products"].as_u64().unwrap() > 0);
    assert_eq!(body["builds"], 0);
    assert_eq!(body["woocommerce_configured"], false);
}
