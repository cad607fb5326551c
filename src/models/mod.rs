//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema PostgreSQL
//! (ver `migrations/`).

pub mod customer;
pub mod ledger;
pub mod stock;
pub mod wash;

pub use customer::Customer;
pub use ledger::{LedgerEntry, LedgerKind, LedgerSummary};
pub use stock::StockItem;
pub use wash::{Wash, WashType};
