use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use super::store::{wash_records, ShopStore, WashOutcome};
use crate::models::{Customer, LedgerEntry, LedgerKind, StockItem, Wash, WashType};
use crate::services::quote_wash;
use crate::utils::errors::{AppError, AppResult};

const CUSTOMER_COLUMNS: &str =
    "id, license_plate, name, phone, total_washes, free_washes_earned, created_at";

// Fila cruda de `washes`; el tipo se guarda como TEXT
#[derive(Debug, sqlx::FromRow)]
struct WashRow {
    id: Uuid,
    customer_id: Uuid,
    wash_type: String,
    price: Decimal,
    is_free: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<WashRow> for Wash {
    type Error = AppError;

    fn try_from(row: WashRow) -> Result<Self, Self::Error> {
        let wash_type = row.wash_type.parse::<WashType>().map_err(|_| {
            AppError::Internal(format!("Wash {} has unknown type '{}'", row.id, row.wash_type))
        })?;
        Ok(Wash {
            id: row.id,
            customer_id: row.customer_id,
            wash_type,
            price: row.price,
            is_free: row.is_free,
            created_at: row.created_at,
        })
    }
}

/// `ShopStore` sobre PostgreSQL
#[derive(Clone)]
pub struct PgShopStore {
    pool: PgPool,
}

impl PgShopStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShopStore for PgShopStore {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {} FROM customers ORDER BY created_at DESC",
            CUSTOMER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!("📋 {} clientes cargados", customers.len());
        Ok(customers)
    }

    async fn find_customer(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {} FROM customers WHERE id = $1",
            CUSTOMER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn create_customer(&self, customer: Customer) -> AppResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customers (id, license_plate, name, phone, total_washes, free_washes_earned, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            CUSTOMER_COLUMNS
        ))
        .bind(customer.id)
        .bind(&customer.license_plate)
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(customer.total_washes)
        .bind(customer.free_washes_earned)
        .bind(customer.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn record_wash(&self, customer_id: Uuid, requested: WashType) -> AppResult<WashOutcome> {
        // Transacción + FOR UPDATE: lavados simultáneos del mismo cliente se serializan
        let mut tx = self.pool.begin().await?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {} FROM customers WHERE id = $1 FOR UPDATE",
            CUSTOMER_COLUMNS
        ))
        .bind(customer_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::CustomerNotFound(customer_id))?;

        let quote = quote_wash(customer.counters(), &customer.license_plate, requested)?;
        let (wash, revenue) = wash_records(customer_id, &quote);

        sqlx::query(
            r#"
            INSERT INTO washes (id, customer_id, wash_type, price, is_free, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(wash.id)
        .bind(wash.customer_id)
        .bind(wash.wash_type.as_str())
        .bind(wash.price)
        .bind(wash.is_free)
        .bind(wash.created_at)
        .execute(&mut *tx)
        .await?;

        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            UPDATE customers
            SET total_washes = $2, free_washes_earned = $3
            WHERE id = $1
            RETURNING {}
            "#,
            CUSTOMER_COLUMNS
        ))
        .bind(customer_id)
        .bind(quote.counters_after.total_washes)
        .bind(quote.counters_after.free_washes_earned)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(entry) = &revenue {
            sqlx::query(
                "INSERT INTO revenue (id, description, amount, created_at) VALUES ($1, $2, $3, $4)",
            )
            .bind(entry.id)
            .bind(&entry.description)
            .bind(entry.amount)
            .bind(entry.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

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
        let rows = sqlx::query_as::<_, WashRow>(
            r#"
            SELECT id, customer_id, wash_type, price, is_free, created_at
            FROM washes
            WHERE customer_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Wash::try_from).collect()
    }

    async fn list_ledger(&self, kind: LedgerKind) -> AppResult<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(&format!(
            "SELECT id, description, amount, created_at FROM {} ORDER BY created_at DESC",
            kind.table_name()
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn create_ledger_entry(&self, kind: LedgerKind, entry: LedgerEntry) -> AppResult<LedgerEntry> {
        let entry = sqlx::query_as::<_, LedgerEntry>(&format!(
            r#"
            INSERT INTO {} (id, description, amount, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, description, amount, created_at
            "#,
            kind.table_name()
        ))
        .bind(entry.id)
        .bind(&entry.description)
        .bind(entry.amount)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn list_stock(&self) -> AppResult<Vec<StockItem>> {
        let items = sqlx::query_as::<_, StockItem>(
            "SELECT id, product_name, quantity, unit, created_at FROM stock ORDER BY lower(product_name), created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create_stock_item(&self, item: StockItem) -> AppResult<StockItem> {
        let item = sqlx::query_as::<_, StockItem>(
            r#"
            INSERT INTO stock (id, product_name, quantity, unit, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_name, quantity, unit, created_at
            "#,
        )
        .bind(item.id)
        .bind(&item.product_name)
        .bind(item.quantity)
        .bind(&item.unit)
        .bind(item.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete_stock_item(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM stock WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
