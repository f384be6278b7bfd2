//! Capa de controllers
//!
//! Cada controller arma sus repositorios desde el pool y expone las
//! operaciones que consumen las rutas.

pub mod booking_controller;
pub mod client_controller;
pub mod depot_controller;
pub mod quote_controller;
pub mod vehicle_controller;
