//! Capa de acceso a datos
//!
//! Cada repositorio recibe el pool por constructor; los tests de la
//! lógica de negocio no los necesitan porque el filtrado y el pricing
//! son puros.

pub mod booking_repository;
pub mod client_repository;
pub mod depot_repository;
pub mod quote_repository;
pub mod vehicle_repository;
