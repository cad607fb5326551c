//! Services module
//!
//! Lógica de negocio pura, sin acceso a la base de datos.

pub mod loyalty_engine;

pub use loyalty_engine::{
    is_free_wash, loyalty_status, parse_requested_wash_type, quote_wash, CustomerCounters,
    LoyaltyStatus, RevenueDraft, WashQuote,
};
