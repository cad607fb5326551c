use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::ledger_dto::CreateLedgerEntryRequest;
use crate::dto::ApiResponse;
use crate::models::{LedgerEntry, LedgerKind, LedgerSummary};
use crate::repositories::ShopStore;
use crate::utils::errors::{validation_error, AppResult};

pub struct LedgerController {
    store: Arc<dyn ShopStore>,
}

impl LedgerController {
    pub fn new(store: Arc<dyn ShopStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        kind: LedgerKind,
        request: CreateLedgerEntryRequest,
    ) -> AppResult<ApiResponse<LedgerEntry>> {
        request.validate()?;
        let amount = request
            .amount
            .ok_or_else(|| validation_error("amount", "required"))?;

        let entry = LedgerEntry::new(request.description.trim().to_string(), amount);
        let entry = self.store.create_ledger_entry(kind, entry).await?;
        info!("💶 Entrada {:?} registrada: {} ({})", kind, entry.description, entry.amount);

        let message = match kind {
            LedgerKind::Expense => "Gasto registrado exitosamente",
            LedgerKind::Revenue => "Ingreso registrado exitosamente",
        };
        Ok(ApiResponse::success_with_message(entry, message))
    }

    pub async fn list(&self, kind: LedgerKind) -> AppResult<Vec<LedgerEntry>> {
        self.store.list_ledger(kind).await
    }

    pub async fn summary(&self) -> AppResult<LedgerSummary> {
        let expenses = self.store.list_ledger(LedgerKind::Expense).await?;
        let revenue = self.store.list_ledger(LedgerKind::Revenue).await?;
        Ok(LedgerSummary::from_entries(&expenses, &revenue))
    }
}
