use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::{LedgerController, StockController};
use crate::dto::ledger_dto::CreateLedgerEntryRequest;
use crate::dto::stock_dto::CreateStockItemRequest;
use crate::dto::ApiResponse;
use crate::models::{LedgerEntry, LedgerKind, LedgerSummary, StockItem};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/revenue", get(list_revenue).post(create_revenue))
        .route("/summary", get(get_summary))
        .route("/stock", get(list_stock).post(create_stock_item))
        .route("/stock/:id", delete(delete_stock_item))
}

async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<LedgerEntry>>, AppError> {
    let controller = LedgerController::new(state.store.clone());
    Ok(Json(controller.list(LedgerKind::Expense).await?))
}

async fn create_expense(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateLedgerEntryRequest>,
) -> Result<Json<ApiResponse<LedgerEntry>>, AppError> {
    let controller = LedgerController::new(state.store.clone());
    Ok(Json(controller.create(LedgerKind::Expense, request).await?))
}

async fn list_revenue(State(state): State<AppState>) -> Result<Json<Vec<LedgerEntry>>, AppError> {
    let controller = LedgerController::new(state.store.clone());
    Ok(Json(controller.list(LedgerKind::Revenue).await?))
}

async fn create_revenue(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateLedgerEntryRequest>,
) -> Result<Json<ApiResponse<LedgerEntry>>, AppError> {
    let controller = LedgerController::new(state.store.clone());
    Ok(Json(controller.create(LedgerKind::Revenue, request).await?))
}

async fn get_summary(State(state): State<AppState>) -> Result<Json<LedgerSummary>, AppError> {
    let controller = LedgerController::new(state.store.clone());
    Ok(Json(controller.summary().await?))
}

async fn list_stock(State(state): State<AppState>) -> Result<Json<Vec<StockItem>>, AppError> {
    let controller = StockController::new(state.store.clone());
    Ok(Json(controller.list().await?))
}

async fn create_stock_item(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateStockItemRequest>,
) -> Result<Json<ApiResponse<StockItem>>, AppError> {
    let controller = StockController::new(state.store.clone());
    Ok(Json(controller.create(request).await?))
}

async fn delete_stock_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = StockController::new(state.store.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Producto eliminado del stock")))
}
