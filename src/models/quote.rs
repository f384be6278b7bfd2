//! Modelo de Quote
//!
//! Registro analítico de una búsqueda, no una oferta de precio vinculante.
//! Se crea best-effort en cada búsqueda del widget: si falla, la búsqueda
//! sigue adelante.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quote {
    pub id: Uuid,
    pub client_id: Uuid,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub number_of_people: Option<i32>,
    pub created_at: DateTime<Utc>,
}
