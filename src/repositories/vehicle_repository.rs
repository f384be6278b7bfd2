//! Repositorio de vehículos
//!
//! Queries parametrizadas sobre la tabla vehicles. El filtrado por
//! predicados opcionales NO se arma concatenando SQL: el repositorio
//! devuelve el conjunto candidato completo y el filtro se evalúa en
//! memoria (ver services::vehicle_filter).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::vehicle::{Transmission, Vehicle, VehicleType};
use crate::utils::errors::AppError;

/// Fila de vehículo con los datos del operador ya joineados
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleWithOperator {
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
    pub operator_name: String,
    pub operator_code: String,
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Conjunto candidato completo para la búsqueda, en orden de alta
    /// para que el sort estable posterior desempate de forma determinista.
    pub async fn find_all_with_operator(&self) -> Result<Vec<VehicleWithOperator>, AppError> {
        let vehicles = sqlx::query_as::<_, VehicleWithOperator>(
            r#"
            SELECT
                v.*,
                o.name AS operator_name,
                o.code AS operator_code
            FROM vehicles v
            JOIN operators o ON v.operator_id = o.id
            ORDER BY v.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id_with_operator(
        &self,
        id: Uuid,
    ) -> Result<Option<VehicleWithOperator>, AppError> {
        let vehicle = sqlx::query_as::<_, VehicleWithOperator>(
            r#"
            SELECT
                v.*,
                o.name AS operator_name,
                o.code AS operator_code
            FROM vehicles v
            JOIN operators o ON v.operator_id = o.id
            WHERE v.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Lookup directo, usado por la creación de reservas para tomar
    /// la tarifa y el operador dueño.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }
}
