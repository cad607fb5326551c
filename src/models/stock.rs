//! Modelo de StockItem

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Producto en inventario
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct StockItem {
    pub id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit: String,
    pub created_at: DateTime<Utc>,
}

impl StockItem {
    pub fn new(product_name: String, quantity: i32, unit: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_name,
            quantity,
            unit,
            created_at: Utc::now(),
        }
    }
}
