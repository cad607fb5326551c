//! Controladores
//!
//! Orquestan validación, motor de fidelización y persistencia por recurso.

pub mod customer_controller;
pub mod ledger_controller;
pub mod stock_controller;

pub use customer_controller::CustomerController;
pub use ledger_controller::LedgerController;
pub use stock_controller::StockController;
