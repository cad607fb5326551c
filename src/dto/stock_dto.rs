use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_empty;

// Request para añadir un producto al inventario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStockItemRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub product_name: String,

    #[validate(required, range(min = 0))]
    pub quantity: Option<i32>,

    pub unit: Option<String>,
}
