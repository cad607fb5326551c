//! Rutas HTTP
//!
//! Composición del router completo de la aplicación.

pub mod admin_routes;
pub mod customer_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::state::AppState;

/// Router completo con estado, CORS y trazas por request
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/customers", customer_routes::create_customer_router())
        .nest("/api/admin", admin_routes::create_admin_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "shine-clean-loyalty",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
