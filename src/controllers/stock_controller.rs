use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::stock_dto::CreateStockItemRequest;
use crate::dto::ApiResponse;
use crate::models::StockItem;
use crate::repositories::ShopStore;
use crate::utils::errors::{not_found_error, validation_error, AppResult};

pub struct StockController {
    store: Arc<dyn ShopStore>,
}

impl StockController {
    pub fn new(store: Arc<dyn ShopStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateStockItemRequest) -> AppResult<ApiResponse<StockItem>> {
        request.validate()?;
        let quantity = request
            .quantity
            .ok_or_else(|| validation_error("quantity", "required"))?;

        let item = StockItem::new(
            request.product_name.trim().to_string(),
            quantity,
            request.unit.map(|u| u.trim().to_string()).unwrap_or_default(),
        );
        let item = self.store.create_stock_item(item).await?;
        info!("📦 {} {} de {} añadidos al stock", item.quantity, item.unit, item.product_name);

        Ok(ApiResponse::success_with_message(item, "Producto añadido al stock"))
    }

    pub async fn list(&self) -> AppResult<Vec<StockItem>> {
        self.store.list_stock().await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.store.delete_stock_item(id).await? {
            return Err(not_found_error("Stock item", &id.to_string()));
        }
        info!("🗑️ Producto {} eliminado del stock", id);
        Ok(())
    }
}
