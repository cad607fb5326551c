//! Repositorios
//!
//! Acceso a datos detrás del trait `ShopStore`: PostgreSQL en producción,
//! memoria para desarrollo y tests.

pub mod memory_store;
pub mod postgres_store;
pub mod store;

pub use memory_store::MemoryShopStore;
pub use postgres_store::PgShopStore;
pub use store::{ShopStore, WashOutcome};
