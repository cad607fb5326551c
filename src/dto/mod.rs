//! DTOs de la API
//!
//! Cuerpos de request (validados con `validator`) y de response.

pub mod api_response;
pub mod customer_dto;
pub mod ledger_dto;
pub mod stock_dto;

pub use api_response::ApiResponse;
