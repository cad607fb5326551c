//! Utilidades de validación
//!
//! Funciones helper usadas por los `#[validate(custom = ...)]` de los DTOs
//! y por los controladores para normalizar datos de entrada.

use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

/// Validar que un string no esté vacío (ni sólo espacios)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Decimales admitidos en importes (columnas `NUMERIC(10, 2)`)
pub const MONEY_SCALE: u32 = 2;

/// Importes deben ser menores que 10^8 (8 dígitos enteros)
pub fn money_limit() -> Decimal {
    Decimal::new(100_000_000, 0)
}

/// Importe monetario: no negativo, como máximo 2 decimales y dentro de `NUMERIC(10, 2)`
pub fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(*value)?;

    if value.normalize().scale() > MONEY_SCALE {
        let mut error = ValidationError::new("money_scale");
        error.add_param("value".into(), value);
        error.add_param("max_decimals".into(), &MONEY_SCALE);
        return Err(error);
    }

    if value.abs() >= money_limit() {
        let mut error = ValidationError::new("money_range");
        error.add_param("value".into(), value);
        error.add_param("max_exclusive".into(), &money_limit());
        return Err(error);
    }
    Ok(())
}

/// Normalizar matrícula: sin espacios en los extremos y en mayúsculas
pub fn normalize_license_plate(value: &str) -> String {
    value.trim().to_uppercase()
}
