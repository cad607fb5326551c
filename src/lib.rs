//! Shine Clean - backend de fidelización
//!
//! Clientes, lavados con programa de fidelización, libros de gastos/ingresos
//! y stock, servidos como API JSON sobre axum.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
