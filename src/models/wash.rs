//! Modelo de Wash
//!
//! Un registro por lavado, inmutable una vez creado.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Tipo de lavado; `Gratuita` sólo lo asigna el motor de fidelización
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WashType {
    Simples,
    SimplesPlus,
    Pro,
    Gratuita,
}

impl WashType {
    /// Tipos que el cliente puede pedir
    pub const PRICED: [WashType; 3] = [WashType::Simples, WashType::SimplesPlus, WashType::Pro];

    pub fn as_str(&self) -> &'static str {
        match self {
            WashType::Simples => "simples",
            WashType::SimplesPlus => "simples_plus",
            WashType::Pro => "pro",
            WashType::Gratuita => "gratuita",
        }
    }

    /// Precio de tarifa en euros; `None` para `Gratuita`
    pub fn list_price(&self) -> Option<Decimal> {
        match self {
            WashType::Simples => Some(Decimal::new(1500, 2)),
            WashType::SimplesPlus => Some(Decimal::new(3000, 2)),
            WashType::Pro => Some(Decimal::new(7500, 2)),
            WashType::Gratuita => None,
        }
    }
}

impl fmt::Display for WashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WashType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "simples" => Ok(WashType::Simples),
            "simples_plus" => Ok(WashType::SimplesPlus),
            "pro" => Ok(WashType::Pro),
            "gratuita" => Ok(WashType::Gratuita),
            other => Err(AppError::InvalidWashType(other.to_string())),
        }
    }
}

/// Lavado registrado
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wash {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub wash_type: WashType,
    pub price: Decimal,
    pub is_free: bool,
    pub created_at: DateTime<Utc>,
}
