//! Motor de fidelización
//!
//! Decide si un lavado es gratuito, cuánto se cobra y cómo quedan los
//! contadores del cliente. Funciones puras: la persistencia es responsabilidad
//! del `ShopStore`, que aplica el resultado como una única unidad.
//!
//! Regla: el lavado es gratuito si y sólo si el cliente ya tiene lavados
//! registrados (`total > 0`) y ese total es múltiplo de [`FREE_WASH_CYCLE`].
//! El primer lavado nunca es gratuito aunque `0 % 9 == 0`.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::WashType;
use crate::utils::errors::{AppError, AppResult};

/// Cada cuántos lavados se gana uno gratuito
pub const FREE_WASH_CYCLE: i32 = 9;

/// Contadores persistidos en el cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomerCounters {
    pub total_washes: i32,
    pub free_washes_earned: i32,
}

/// Entrada de ingreso que debe registrarse junto al lavado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueDraft {
    pub description: String,
    pub amount: Decimal,
}

/// Resultado del cálculo para un lavado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WashQuote {
    pub requested: WashType,
    /// `Gratuita` cuando el lavado no se cobra, si no el tipo pedido
    pub effective: WashType,
    pub charge: Decimal,
    pub is_free: bool,
    pub counters_after: CustomerCounters,
    /// Sólo presente en lavados cobrados
    pub revenue: Option<RevenueDraft>,
}

/// Estado de fidelización mostrado en el listado de clientes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoyaltyStatus {
    pub next_wash_free: bool,
    /// 0 cuando el próximo lavado ya es gratuito
    pub washes_until_free: i32,
}

/// ¿Es gratuito el lavado que se registra con `total_washes_before` lavados previos?
pub fn is_free_wash(total_washes_before: i32) -> bool {
    total_washes_before > 0 && total_washes_before % FREE_WASH_CYCLE == 0
}

/// Convertir el nombre recibido en un tipo de lavado que se puede pedir.
///
/// `gratuita` no se acepta: sólo el motor lo asigna.
pub fn parse_requested_wash_type(name: &str) -> AppResult<WashType> {
    let wash_type: WashType = name.trim().parse()?;
    if wash_type.list_price().is_none() {
        return Err(AppError::InvalidWashType(name.to_string()));
    }
    Ok(wash_type)
}

/// Calcular cargo, tipo efectivo, contadores nuevos e ingreso asociado.
pub fn quote_wash(
    before: CustomerCounters,
    license_plate: &str,
    requested: WashType,
) -> AppResult<WashQuote> {
    let list_price = requested
        .list_price()
        .ok_or_else(|| AppError::InvalidWashType(requested.to_string()))?;

    let is_free = is_free_wash(before.total_washes);
    let charge = if is_free { Decimal::ZERO } else { list_price };
    let effective = if is_free { WashType::Gratuita } else { requested };

    let overflow = || AppError::Internal(format!("Wash counters overflow for {}", license_plate));
    let counters_after = CustomerCounters {
        total_washes: before.total_washes.checked_add(1).ok_or_else(overflow)?,
        free_washes_earned: before
            .free_washes_earned
            .checked_add(i32::from(is_free))
            .ok_or_else(overflow)?,
    };

    let revenue = (!is_free).then(|| RevenueDraft {
        description: format!("Lavagem {} - {}", requested, license_plate),
        amount: charge,
    });

    Ok(WashQuote {
        requested,
        effective,
        charge,
        is_free,
        counters_after,
        revenue,
    })
}

/// Derivación para la interfaz, coherente con [`is_free_wash`].
pub fn loyalty_status(total_washes: i32) -> LoyaltyStatus {
    let next_wash_free = is_free_wash(total_washes);
    let washes_until_free = if next_wash_free {
        0
    } else {
        FREE_WASH_CYCLE - total_washes.rem_euclid(FREE_WASH_CYCLE)
    };
    LoyaltyStatus {
        next_wash_free,
        washes_until_free,
    }
}
