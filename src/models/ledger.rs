//! Libros de gastos e ingresos
//!
//! Ambos libros comparten forma; cada uno vive en su propia tabla.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Libro al que pertenece una entrada
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LedgerKind {
    Expense,
    Revenue,
}

impl LedgerKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            LedgerKind::Expense => "expenses",
            LedgerKind::Revenue => "revenue",
        }
    }
}

/// Entrada de gasto o ingreso (sólo inserción)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(description: String, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            amount,
            created_at: Utc::now(),
        }
    }
}

/// Totales del panel de administración
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerSummary {
    pub total_expenses: Decimal,
    pub total_revenue: Decimal,
    pub balance: Decimal,
}

impl LedgerSummary {
    pub fn from_entries(expenses: &[LedgerEntry], revenue: &[LedgerEntry]) -> Self {
        let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();
        let total_revenue: Decimal = revenue.iter().map(|e| e.amount).sum();
        Self {
            total_expenses,
            total_revenue,
            balance: total_revenue - total_expenses,
        }
    }
}
