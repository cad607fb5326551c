//! Contrato de persistencia
//!
//! Las operaciones que la aplicación necesita del backend. `record_wash` lee
//! los contadores, calcula con el motor de fidelización y escribe lavado,
//! contadores e ingreso como una sola unidad.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Customer, LedgerEntry, LedgerKind, StockItem, Wash, WashType};
use crate::services::WashQuote;
use crate::utils::errors::AppResult;

/// Resultado de registrar un lavado
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WashOutcome {
    pub wash: Wash,
    pub customer: Customer,
    /// `None` en lavados gratuitos
    pub revenue: Option<LedgerEntry>,
}

#[async_trait]
pub trait ShopStore: Send + Sync {
    /// Clientes, del más reciente al más antiguo
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    async fn find_customer(&self, id: Uuid) -> AppResult<Option<Customer>>;

    async fn create_customer(&self, customer: Customer) -> AppResult<Customer>;

    /// Falla con `CustomerNotFound` sin escribir nada si el cliente no existe
    async fn record_wash(&self, customer_id: Uuid, requested: WashType) -> AppResult<WashOutcome>;

    /// Lavados de un cliente, del más reciente al más antiguo
    async fn list_washes(&self, customer_id: Uuid) -> AppResult<Vec<Wash>>;

    /// Entradas de un libro, de la más reciente a la más antigua
    async fn list_ledger(&self, kind: LedgerKind) -> AppResult<Vec<LedgerEntry>>;

    async fn create_ledger_entry(&self, kind: LedgerKind, entry: LedgerEntry) -> AppResult<LedgerEntry>;

    /// Inventario ordenado por nombre de producto
    async fn list_stock(&self) -> AppResult<Vec<StockItem>>;

    async fn create_stock_item(&self, item: StockItem) -> AppResult<StockItem>;

    /// `false` si no existía
    async fn delete_stock_item(&self, id: Uuid) -> AppResult<bool>;
}

/// Registros a escribir para un lavado ya calculado
pub(crate) fn wash_records(customer_id: Uuid, quote: &WashQuote) -> (Wash, Option<LedgerEntry>) {
    let wash = Wash {
        id: Uuid::new_v4(),
        customer_id,
        wash_type: quote.effective,
        price: quote.charge,
        is_free: quote.is_free,
        created_at: chrono::Utc::now(),
    };
    let revenue = quote
        .revenue
        .as_ref()
        .map(|draft| LedgerEntry::new(draft.description.clone(), draft.amount));
    (wash, revenue)
}
