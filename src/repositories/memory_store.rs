use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::store::{wash_records, ShopStore, WashOutcome};
use crate::models::{Customer, LedgerEntry, LedgerKind, StockItem, Wash, WashType};
use crate::services::quote_wash;
use crate::utils::errors::{AppError, AppResult};

// Vectores en orden de inserción; los listados se devuelven invertidos
#[derive(Default)]
struct MemoryState {
    customers: Vec<Customer>,
    washes: Vec<Wash>,
    expenses: Vec<LedgerEntry>,
    revenue: Vec<LedgerEntry>,
    stock: Vec<StockItem>,
}

impl MemoryState {
    fn ledger_mut(&mut self, kind: LedgerKind) -> &mut Vec<LedgerEntry> {
        match kind {
            LedgerKind::Expense => &mut self.expenses,
            LedgerKind::Revenue => &mut self.revenue,
        }
    }

    fn ledger(&self, kind: LedgerKind) -> &[LedgerEntry] {
        match kind {
            LedgerKind::Expense => &self.expenses,
            LedgerKind::Revenue => &self.revenue,
        }
    }
}

/// `ShopStore` en memoria, para desarrollo local y tests
#[derive(Default)]
pub struct MemoryShopStore {
    state: RwLock<MemoryState>,
}

impl MemoryShopStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShopStore for MemoryShopStore {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        let state = self.state.read().await;
        Ok(state.customers.iter().rev().cloned().collect())
    }

    async fn find_customer(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn create_customer(&self, customer: Customer) -> AppResult<Customer> {
        let mut state = self.state.write().await;
        state.customers.push(customer.clone());
        Ok(customer)
    }

    async fn record_wash(&self, customer_id: Uuid, requested: WashType) -> AppResult<WashOutcome> {
        // Lectura, cálculo y escritura bajo el mismo lock
        let mut state = self.state.write().await;

        let customer = state
            .customers
            .iter_mut()
            .find(|c| c.id == customer_id)
            .ok_or(AppError::CustomerNotFound(customer_id))?;

        let quote = quote_wash(customer.counters(), &customer.license_plate, requested)?;
        let (wash, revenue) = wash_records(customer_id, &quote);

        customer.apply_counters(quote.counters_after);
        let customer = customer.clone();

        state.washes.push(wash.clone());
        if let Some(entry) = &revenue {
            state.revenue.push(entry.clone());
        }

        info!(
            "🚿 Lavado {} registrado para {} (total: {}, gratuitos: {})",
            wash.wash_type, customer.license_plate, customer.total_washes, customer.free_washes_earned
        );

        Ok(WashOutcome {
            wash,
            customer,
            revenue,
        })
    }

    async fn list_washes(&self, customer_id: Uuid) -> AppResult<Vec<Wash>> {
        let state = self.state.read().await;
        Ok(state
            .washes
            .iter()
            .rev()
            .filter(|w| w.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn list_ledger(&self, kind: LedgerKind) -> AppResult<Vec<LedgerEntry>> {
        let state = self.state.read().await;
        Ok(state.ledger(kind).iter().rev().cloned().collect())
    }

    async fn create_ledger_entry(&self, kind: LedgerKind, entry: LedgerEntry) -> AppResult<LedgerEntry> {
        let mut state = self.state.write().await;
        state.ledger_mut(kind).push(entry.clone());
        Ok(entry)
    }

    async fn list_stock(&self) -> AppResult<Vec<StockItem>> {
        let state = self.state.read().await;
        let mut items = state.stock.clone();
        items.sort_by_key(|item| item.product_name.to_lowercase());
        Ok(items)
    }

    async fn create_stock_item(&self, item: StockItem) -> AppResult<StockItem> {
        let mut state = self.state.write().await;
        state.stock.push(item.clone());
        Ok(item)
    }

    async fn delete_stock_item(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.write().await;
        let before = state.stock.len();
        state.stock.retain(|item| item.id != id);
        Ok(state.stock.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    async fn store_with_customer() -> (MemoryShopStore, Customer) {
        let store = MemoryShopStore::new();
        let customer = store
            .create_customer(Customer::new("AA-00-BB".into(), "Rui".into(), "910".into()))
            .await
            .unwrap();
        (store, customer)
    }

    #[tokio::test]
    async fn test_customers_listed_newest_first() {
        let store = MemoryShopStore::new();
        let first = store
            .create_customer(Customer::new("AA-00-AA".into(), "Ana".into(), "1".into()))
            .await
            .unwrap();
        let second = store
            .create_customer(Customer::new("BB-00-BB".into(), "Bruno".into(), "2".into()))
            .await
            .unwrap();

        let ids: Vec<Uuid> = store.list_customers().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_paid_wash_writes_all_records() {
        let (store, customer) = store_with_customer().await;

        let outcome = store.record_wash(customer.id, WashType::Pro).await.unwrap();
        assert!(!outcome.wash.is_free);
        assert_eq!(outcome.wash.price, Decimal::new(75, 0));
        assert_eq!(outcome.customer.total_washes, 1);

        let revenue = store.list_ledger(LedgerKind::Revenue).await.unwrap();
        assert_eq!(revenue.len(), 1);
        assert_eq!(revenue[0].description, "Lavagem pro - AA-00-BB");
        assert_eq!(store.list_washes(customer.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_tenth_wash_is_free_and_skips_revenue() {
        let (store, customer) = store_with_customer().await;
        for _ in 0..9 {
            store.record_wash(customer.id, WashType::Simples).await.unwrap();
        }

        let outcome = store.record_wash(customer.id, WashType::SimplesPlus).await.unwrap();
        assert!(outcome.wash.is_free);
        assert_eq!(outcome.wash.wash_type, WashType::Gratuita);
        assert_eq!(outcome.wash.price, Decimal::ZERO);
        assert!(outcome.revenue.is_none());
        assert_eq!(outcome.customer.total_washes, 10);
        assert_eq!(outcome.customer.free_washes_earned, 1);

        assert_eq!(store.list_ledger(LedgerKind::Revenue).await.unwrap().len(), 9);
        let washes = store.list_washes(customer.id).await.unwrap();
        assert_eq!(washes.len(), 10);
        assert_eq!(washes[0].wash_type, WashType::Gratuita);
    }

    #[tokio::test]
    async fn test_unknown_customer_writes_nothing() {
        let (store, _) = store_with_customer().await;
        let missing = Uuid::new_v4();

        let err = store.record_wash(missing, WashType::Simples).await.unwrap_err();
        assert!(matches!(err, AppError::CustomerNotFound(id) if id == missing));
        assert!(store.list_ledger(LedgerKind::Revenue).await.unwrap().is_empty());
        assert!(store.list_washes(missing).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_washes_do_not_double_count() {
        let (store, customer) = store_with_customer().await;
        let store = Arc::new(store);

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.record_wash(customer.id, WashType::Simples).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let customer = store.find_customer(customer.id).await.unwrap().unwrap();
        assert_eq!(customer.total_washes, 20);
        // lavados gratuitos con 9 y 18 previos
        assert_eq!(customer.free_washes_earned, 2);
        assert_eq!(store.list_ledger(LedgerKind::Revenue).await.unwrap().len(), 18);
    }

    #[tokio::test]
    async fn test_stock_sorted_by_name_and_deletable() {
        let store = MemoryShopStore::new();
        let wax = store
            .create_stock_item(StockItem::new("Cera".into(), 3, "latas".into()))
            .await
            .unwrap();
        store
            .create_stock_item(StockItem::new("abrilhantador".into(), 2, "litros".into()))
            .await
            .unwrap();

        let names: Vec<String> = store
            .list_stock()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.product_name)
            .collect();
        assert_eq!(names, vec!["abrilhantador".to_string(), "Cera".to_string()]);

        assert!(store.delete_stock_item(wax.id).await.unwrap());
        assert!(!store.delete_stock_item(wax.id).await.unwrap());
        assert_eq!(store.list_stock().await.unwrap().len(), 1);
    }
}
