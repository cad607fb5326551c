//! Utilidades del sistema
//!
//! Manejo de errores, extractores y helpers de validación.

pub mod errors;
pub mod extract;
pub mod validation;
