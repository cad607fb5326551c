use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::{validate_amount, validate_not_empty};

// Request para registrar un gasto o un ingreso manual
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLedgerEntryRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub description: String,

    #[validate(required, custom = "validate_amount")]
    pub amount: Option<Decimal>,
}
