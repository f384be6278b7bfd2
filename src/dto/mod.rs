//! Tipos del contrato HTTP/JSON
//!
//! Requests y responses compartidos por los handlers del servidor y el
//! cliente HTTP del widget. Todas las responses llevan el flag success.

pub mod booking_dto;
pub mod client_dto;
pub mod depot_dto;
pub mod quote_dto;
pub mod vehicle_dto;
