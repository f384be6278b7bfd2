//! Lógica de negocio pura
//!
//! Servicios sin efectos: pricing y filtrado. Los controllers los
//! combinan con los repositorios.

pub mod pricing_service;
pub mod vehicle_filter;
