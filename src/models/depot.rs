//! Modelo de Depot
//!
//! Punto físico de pickup/dropoff perteneciente a un operador.
//! Datos de referencia de solo lectura.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Depot {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}
