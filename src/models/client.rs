//! Modelo de Client
//!
//! Un client es un tenant white-label que embebe el widget con su
//! propio tema. Configuración de solo lectura para este sistema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub domain: String,
    pub theme_primary_color: String,
    pub theme_secondary_color: String,
    pub created_at: DateTime<Utc>,
}
