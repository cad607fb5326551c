use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::CustomerController;
use crate::dto::customer_dto::{
    CreateCustomerRequest, CustomerFilters, CustomerResponse, RecordWashRequest, WashReceiptResponse,
};
use crate::dto::ApiResponse;
use crate::models::Wash;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/:id", get(get_customer))
        .route("/:id/washes", get(list_washes).post(record_wash))
}

async fn create_customer(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_customers(
    State(state): State<AppState>,
    Query(filters): Query<CustomerFilters>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.store.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, AppError> {
    let controller = CustomerController::new(state.store.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn record_wash(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<RecordWashRequest>,
) -> Result<Json<ApiResponse<WashReceiptResponse>>, AppError> {
    let controller = CustomerController::new(state.store.clone());
    let response = controller.record_wash(id, request).await?;
    Ok(Json(response))
}

async fn list_washes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Wash>>, AppError> {
    let controller = CustomerController::new(state.store.clone());
    let response = controller.list_washes(id).await?;
    Ok(Json(response))
}
