//! Repositorio de depots
//!
//! Datos de referencia de solo lectura, siempre con el nombre del
//! operador joineado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Fila de depot con el nombre del operador
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepotWithOperator {
    pub id: Uuid,
    pub operator_id: Uuid,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub operator_name: String,
}

pub struct DepotRepository {
    pool: PgPool,
}

impl DepotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all_with_operator(&self) -> Result<Vec<DepotWithOperator>, AppError> {
        let depots = sqlx::query_as::<_, DepotWithOperator>(
            r#"
            SELECT
                d.*,
                o.name AS operator_name
            FROM depots d
            JOIN operators o ON d.operator_id = o.id
            ORDER BY d.city, d.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(depots)
    }

    /// Búsqueda por ciudad, case-insensitive
    pub async fn find_by_city(&self, city: &str) -> Result<Vec<DepotWithOperator>, AppError> {
        let depots = sqlx::query_as::<_, DepotWithOperator>(
            r#"
            SELECT
                d.*,
                o.name AS operator_name
            FROM depots d
            JOIN operators o ON d.operator_id = o.id
            WHERE LOWER(d.city) = LOWER($1)
            ORDER BY d.name
            "#,
        )
        .bind(city)
        .fetch_all(&self.pool)
        .await?;

        Ok(depots)
    }
}
