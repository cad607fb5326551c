//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::ShopStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ShopStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ShopStore>, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
