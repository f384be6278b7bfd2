//! Repositorio de quotes
//!
//! Registros analíticos de búsquedas. Los paths de lectura son para
//! analítica, con la lista global acotada a los últimos 100.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::quote::Quote;
use crate::utils::errors::AppError;

/// Payload de inserción de un quote
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub client_id: Uuid,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub number_of_people: Option<i32>,
}

/// Fila de quote con el nombre del client joineado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuoteWithClient {
    pub id: Uuid,
    pub client_id: Uuid,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub number_of_people: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
}

pub struct QuoteRepository {
    pool: PgPool,
}

impl QuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, quote: NewQuote) -> Result<Quote, AppError> {
        let created = sqlx::query_as::<_, Quote>(
            r#"
            INSERT INTO quotes (
                client_id,
                pickup_location,
                dropoff_location,
                pickup_date,
                dropoff_date,
                number_of_people
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(quote.client_id)
        .bind(quote.pickup_location)
        .bind(quote.dropoff_location)
        .bind(quote.pickup_date)
        .bind(quote.dropoff_date)
        .bind(quote.number_of_people)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_recent_with_client(&self) -> Result<Vec<QuoteWithClient>, AppError> {
        let quotes = sqlx::query_as::<_, QuoteWithClient>(
            r#"
            SELECT
                q.*,
                c.name AS client_name
            FROM quotes q
            JOIN clients c ON q.client_id = c.id
            ORDER BY q.created_at DESC
            LIMIT 100
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }

    pub async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<Quote>, AppError> {
        let quotes = sqlx::query_as::<_, Quote>(
            r#"
            SELECT *
            FROM quotes
            WHERE client_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }
}
