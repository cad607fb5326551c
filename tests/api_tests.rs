use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shine_clean_loyalty::config::EnvironmentConfig;
use shine_clean_loyalty::repositories::MemoryShopStore;
use shine_clean_loyalty::{create_app_router, AppState};

// Función helper para crear la app de test sobre el store en memoria
fn create_test_app() -> Router {
    let state = AppState::new(Arc::new(MemoryShopStore::new()), EnvironmentConfig::default());
    create_app_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_customer(app: &Router, plate: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/customers",
        Some(json!({ "license_plate": plate, "name": name, "phone": "+351 900 000 000" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn record_wash(app: &Router, customer_id: &str, wash_type: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/api/customers/{}/washes", customer_id),
        Some(json!({ "wash_type": wash_type })),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_customer_normalizes_plate() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/customers",
        Some(json!({ "license_plate": " aa-00-bb ", "name": "Rui Costa", "phone": "910000000" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["license_plate"], "AA-00-BB");
    assert_eq!(body["data"]["total_washes"], 0);
    assert_eq!(body["data"]["free_washes_earned"], 0);
    assert_eq!(body["data"]["next_wash_free"], false);
    assert_eq!(body["data"]["washes_until_free"], 9);
}

#[tokio::test]
async fn test_create_customer_missing_fields_is_validation_error() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/customers",
        Some(json!({ "license_plate": "AA-00-BB", "name": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (_, customers) = send(&app, "GET", "/api/customers", None).await;
    assert_eq!(customers.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_customers_newest_first_with_search() {
    let app = create_test_app();
    create_customer(&app, "AA-00-AA", "Ana Sousa").await;
    create_customer(&app, "BB-11-BB", "Bruno Dias").await;

    let (status, body) = send(&app, "GET", "/api/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    let plates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["license_plate"].as_str().unwrap())
        .collect();
    assert_eq!(plates, vec!["BB-11-BB", "AA-00-AA"]);

    let (_, body) = send(&app, "GET", "/api/customers?search=sousa", None).await;
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Ana Sousa");
}

#[tokio::test]
async fn test_first_wash_is_charged_and_recorded_as_revenue() {
    let app = create_test_app();
    let id = create_customer(&app, "AA-00-BB", "Rui").await;

    let (status, body) = record_wash(&app, &id, "simples").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["wash"]["is_free"], false);
    assert_eq!(body["data"]["wash"]["wash_type"], "simples");
    assert_eq!(body["data"]["customer"]["total_washes"], 1);
    assert_eq!(body["data"]["revenue"]["description"], "Lavagem simples - AA-00-BB");

    let (_, revenue) = send(&app, "GET", "/api/admin/revenue", None).await;
    assert_eq!(revenue.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_tenth_wash_is_free() {
    let app = create_test_app();
    let id = create_customer(&app, "AA-00-BB", "Rui").await;

    for _ in 0..9 {
        let (status, _) = record_wash(&app, &id, "pro").await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, customer) = send(&app, "GET", &format!("/api/customers/{}", id), None).await;
    assert_eq!(customer["total_washes"], 9);
    assert_eq!(customer["next_wash_free"], true);
    assert_eq!(customer["washes_until_free"], 0);

    let (status, body) = record_wash(&app, &id, "simples_plus").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["wash"]["is_free"], true);
    assert_eq!(body["data"]["wash"]["wash_type"], "gratuita");
    assert!(body["data"]["revenue"].is_null());
    assert_eq!(body["data"]["customer"]["total_washes"], 10);
    assert_eq!(body["data"]["customer"]["free_washes_earned"], 1);
    assert_eq!(body["data"]["customer"]["washes_until_free"], 8);

    let (_, revenue) = send(&app, "GET", "/api/admin/revenue", None).await;
    assert_eq!(revenue.as_array().unwrap().len(), 9);

    let (_, washes) = send(&app, "GET", &format!("/api/customers/{}/washes", id), None).await;
    let washes = washes.as_array().unwrap();
    assert_eq!(washes.len(), 10);
    assert_eq!(washes[0]["wash_type"], "gratuita");
}

#[tokio::test]
async fn test_invalid_wash_type_is_rejected() {
    let app = create_test_app();
    let id = create_customer(&app, "AA-00-BB", "Rui").await;

    let (status, body) = record_wash(&app, &id, "deluxe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_WASH_TYPE");

    let (status, body) = record_wash(&app, &id, "gratuita").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_WASH_TYPE");

    let (_, customer) = send(&app, "GET", &format!("/api/customers/{}", id), None).await;
    assert_eq!(customer["total_washes"], 0);
}

#[tokio::test]
async fn test_wash_for_unknown_customer() {
    let app = create_test_app();
    let (status, body) =
        record_wash(&app, "550e8400-e29b-41d4-a716-446655440000", "simples").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CUSTOMER_NOT_FOUND");

    let (_, revenue) = send(&app, "GET", "/api/admin/revenue", None).await;
    assert!(revenue.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_ledger_summary_balance() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/expenses",
        Some(json!({ "description": "Produtos de limpeza", "amount": 40.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/api/admin/revenue",
        Some(json!({ "description": "Serviço extra", "amount": "20.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let id = create_customer(&app, "AA-00-BB", "Rui").await;
    record_wash(&app, &id, "pro").await;

    let (status, summary) = send(&app, "GET", "/api/admin/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_expenses"].as_str().unwrap().parse::<f64>().unwrap(), 40.5);
    assert_eq!(summary["total_revenue"].as_str().unwrap().parse::<f64>().unwrap(), 95.0);
    assert_eq!(summary["balance"].as_str().unwrap().parse::<f64>().unwrap(), 54.5);

    let (_, revenue) = send(&app, "GET", "/api/admin/revenue", None).await;
    let revenue = revenue.as_array().unwrap();
    assert_eq!(revenue[0]["description"], "Lavagem pro - AA-00-BB");
    assert_eq!(revenue[1]["description"], "Serviço extra");
}

#[tokio::test]
async fn test_ledger_entry_requires_amount() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/expenses",
        Some(json!({ "description": "Sem valor" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_stock_crud() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/stock",
        Some(json!({ "product_name": "Shampoo para carros", "quantity": 5, "unit": "litros" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    send(
        &app,
        "POST",
        "/api/admin/stock",
        Some(json!({ "product_name": "Cera", "quantity": 2 })),
    )
    .await;

    let (_, stock) = send(&app, "GET", "/api/admin/stock", None).await;
    let stock = stock.as_array().unwrap();
    assert_eq!(stock.len(), 2);
    assert_eq!(stock[0]["product_name"], "Cera");
    assert_eq!(stock[0]["unit"], "");

    let uri = format!("/api/admin/stock/{}", id);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (_, stock) = send(&app, "GET", "/api/admin/stock", None).await;
    assert_eq!(stock.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_amounts_must_fit_money_column() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/expenses",
        Some(json!({ "description": "Produtos", "amount": "12.345" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["amount"][0]["code"], "money_scale");

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/revenue",
        Some(json!({ "description": "Serviço extra", "amount": "100000000000" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["amount"][0]["code"], "money_range");

    let (_, summary) = send(&app, "GET", "/api/admin/summary", None).await;
    assert_eq!(summary["balance"].as_str().unwrap().parse::<f64>().unwrap(), 0.0);
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/stock",
        Some(json!({ "product_name": "Cera", "quantity": 1.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let request = Request::builder()
        .method("POST")
        .uri("/api/customers")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");
}
