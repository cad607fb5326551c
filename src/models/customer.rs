//! Modelo de Customer
//!
//! Mapea la tabla `customers`. Los contadores sólo se modifican al registrar lavados.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::services::loyalty_engine::{self, CustomerCounters, LoyaltyStatus};

/// Cliente del centro de lavado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub license_plate: String,
    pub name: String,
    pub phone: String,
    pub total_washes: i32,
    pub free_washes_earned: i32,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Nuevo cliente sin lavados; la matrícula debe venir ya normalizada
    pub fn new(license_plate: String, name: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            license_plate,
            name,
            phone,
            total_washes: 0,
            free_washes_earned: 0,
            created_at: Utc::now(),
        }
    }

    pub fn counters(&self) -> CustomerCounters {
        CustomerCounters {
            total_washes: self.total_washes,
            free_washes_earned: self.free_washes_earned,
        }
    }

    pub fn apply_counters(&mut self, counters: CustomerCounters) {
        self.total_washes = counters.total_washes;
        self.free_washes_earned = counters.free_washes_earned;
    }

    pub fn loyalty_status(&self) -> LoyaltyStatus {
        loyalty_engine::loyalty_status(self.total_washes)
    }

    /// Búsqueda por matrícula o nombre, sin distinguir mayúsculas
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.license_plate.to_lowercase().contains(&term)
            || self.name.to_lowercase().contains(&term)
    }
}
