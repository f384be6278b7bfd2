//! Repositorio de reservas
//!
//! Una escritura durable por reserva creada. La fila entra con el
//! total ya derivado y el estado inicial 'pending'.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::utils::errors::AppError;

/// Payload de inserción, ya validado y con el precio derivado
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
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
}

/// Fila de reserva con los nombres joineados para la vista de detalle
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingDetail {
    pub id: Uuid,
    pub client_id: Uuid,
    pub vehicle_id: Uuid,
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
    pub vehicle_name: String,
    pub operator_name: String,
    pub pickup_depot_name: String,
    pub dropoff_depot_name: String,
}

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, booking: NewBooking) -> Result<Booking, AppError> {
        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                client_id,
                vehicle_id,
                operator_id,
                pickup_depot_id,
                dropoff_depot_id,
                pickup_date,
                dropoff_date,
                guest_name,
                guest_email,
                guest_phone,
                number_of_people,
                total_price,
                status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(booking.client_id)
        .bind(booking.vehicle_id)
        .bind(booking.operator_id)
        .bind(booking.pickup_depot_id)
        .bind(booking.dropoff_depot_id)
        .bind(booking.pickup_date)
        .bind(booking.dropoff_date)
        .bind(booking.guest_name)
        .bind(booking.guest_email)
        .bind(booking.guest_phone)
        .bind(booking.number_of_people)
        .bind(booking.total_price)
        .bind(booking.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_detail_by_id(&self, id: Uuid) -> Result<Option<BookingDetail>, AppError> {
        let booking = sqlx::query_as::<_, BookingDetail>(
            r#"
            SELECT
                b.*,
                v.name AS vehicle_name,
                o.name AS operator_name,
                pd.name AS pickup_depot_name,
                dd.name AS dropoff_depot_name
            FROM bookings b
            JOIN vehicles v ON b.vehicle_id = v.id
            JOIN operators o ON b.operator_id = o.id
            JOIN depots pd ON b.pickup_depot_id = pd.id
            JOIN depots dd ON b.dropoff_depot_id = dd.id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }
}
