use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Customer, LedgerEntry, Wash};
use crate::repositories::WashOutcome;
use crate::services::LoyaltyStatus;
use crate::utils::validation::validate_not_empty;

// Request para registrar un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub license_plate: String,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub name: String,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub phone: String,
}

// Request para registrar un lavado
#[derive(Debug, Deserialize, Validate)]
pub struct RecordWashRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub wash_type: String,
}

// Filtros del listado de clientes
#[derive(Debug, Default, Deserialize)]
pub struct CustomerFilters {
    pub search: Option<String>,
}

// Response de cliente con su estado de fidelización
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(flatten)]
    pub loyalty: LoyaltyStatus,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        let loyalty = customer.loyalty_status();
        Self { customer, loyalty }
    }
}

// Response de un lavado registrado
#[derive(Debug, Serialize)]
pub struct WashReceiptResponse {
    pub wash: Wash,
    pub customer: CustomerResponse,
    pub revenue: Option<LedgerEntry>,
}

impl From<WashOutcome> for WashReceiptResponse {
    fn from(outcome: WashOutcome) -> Self {
        Self {
            wash: outcome.wash,
            customer: outcome.customer.into(),
            revenue: outcome.revenue,
        }
    }
}
