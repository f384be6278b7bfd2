//! Modelo de Booking
//!
//! Una reserva nace siempre en estado 'pending'. Ningún endpoint de este
//! sistema muta el estado; las transiciones posteriores quedan fuera de
//! alcance. El total_price se deriva al crear y queda persistido: cambios
//! posteriores al precio del vehículo no afectan reservas existentes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use uuid::Uuid;

/// Estado de la reserva - mapea al ENUM booking_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
    /// Denormalizado desde el vehículo al momento de crear
    pub operator_id: Uuid,
    pub pickup_depot_id: Uuid,
    pub dropoff_depot_id: Uuid,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub number_of_people: i32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
