//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y los enums de catálogo.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use uuid::Uuid;

/// Tipo de vehículo - mapea al ENUM vehicle_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Campervan,
    Motorhome,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Campervan => write!(f, "campervan"),
            VehicleType::Motorhome => write!(f, "motorhome"),
        }
    }
}

/// Transmisión - mapea al ENUM transmission_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "transmission_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Automatic,
    Manual,
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transmission::Automatic => write!(f, "automatic"),
            Transmission::Manual => write!(f, "manual"),
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles.
/// Inmutable en el alcance de este sistema: no hay endpoint de update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub transmission: Transmission,
    pub sleeps: i32,
    pub has_toilet: bool,
    pub has_shower: bool,
    pub has_kitchen: bool,
    pub price_per_day: Decimal,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
