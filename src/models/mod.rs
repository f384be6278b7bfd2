//! Modelos de dominio
//!
//! Structs que mapean 1:1 a las tablas del schema PostgreSQL.

pub mod booking;
pub mod client;
pub mod depot;
pub mod operator;
pub mod quote;
pub mod vehicle;

pub use booking::{Booking, BookingStatus};
pub use client::Client;
pub use depot::Depot;
pub use operator::Operator;
pub use quote::Quote;
pub use vehicle::{Transmission, Vehicle, VehicleType};
