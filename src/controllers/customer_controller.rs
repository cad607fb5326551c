use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::dto::customer_dto::{
    CreateCustomerRequest, CustomerFilters, CustomerResponse, RecordWashRequest, WashReceiptResponse,
};
use crate::dto::ApiResponse;
use crate::models::{Customer, Wash};
use crate::repositories::ShopStore;
use crate::services::parse_requested_wash_type;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::normalize_license_plate;

pub struct CustomerController {
    store: Arc<dyn ShopStore>,
}

impl CustomerController {
    pub fn new(store: Arc<dyn ShopStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> AppResult<ApiResponse<CustomerResponse>> {
        request.validate()?;

        let customer = Customer::new(
            normalize_license_plate(&request.license_plate),
            request.name.trim().to_string(),
            request.phone.trim().to_string(),
        );
        let customer = self.store.create_customer(customer).await?;
        info!("👤 Cliente {} registrado ({})", customer.license_plate, customer.id);

        Ok(ApiResponse::success_with_message(
            customer.into(),
            "Cliente registrado exitosamente",
        ))
    }

    pub async fn list(&self, filters: CustomerFilters) -> AppResult<Vec<CustomerResponse>> {
        let customers = self.store.list_customers().await?;
        let search = filters.search.unwrap_or_default();

        let response: Vec<CustomerResponse> = customers
            .into_iter()
            .filter(|c| c.matches_search(&search))
            .map(CustomerResponse::from)
            .collect();

        debug!("🔍 {} clientes para la búsqueda '{}'", response.len(), search);
        Ok(response)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CustomerResponse> {
        let customer = self
            .store
            .find_customer(id)
            .await?
            .ok_or(AppError::CustomerNotFound(id))?;

        Ok(customer.into())
    }

    pub async fn record_wash(
        &self,
        customer_id: Uuid,
        request: RecordWashRequest,
    ) -> AppResult<ApiResponse<WashReceiptResponse>> {
        request.validate()?;
        let requested = parse_requested_wash_type(&request.wash_type)?;

        let outcome = self.store.record_wash(customer_id, requested).await?;
        let message = if outcome.wash.is_free {
            "Lavado gratuito registrado exitosamente"
        } else {
            "Lavado registrado exitosamente"
        };

        Ok(ApiResponse::success_with_message(outcome.into(), message))
    }

    pub async fn list_washes(&self, customer_id: Uuid) -> AppResult<Vec<Wash>> {
        if self.store.find_customer(customer_id).await?.is_none() {
            return Err(AppError::CustomerNotFound(customer_id));
        }
        self.store.list_washes(customer_id).await
    }
}
