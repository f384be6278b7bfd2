//! Rutas de la API
//!
//! Handlers finos: extraen, delegan al controller y serializan.

pub mod booking_routes;
pub mod client_routes;
pub mod depot_routes;
pub mod quote_routes;
pub mod vehicle_routes;
