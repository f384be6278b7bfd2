//! Controller de quotes
//!
//! El endpoint de creación es un registro analítico: el widget lo llama
//! best-effort antes de cada búsqueda y descarta el error si falla.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::quote_dto::{ClientQuotesResponse, CreateQuoteRequest, QuoteResponse, QuotesResponse};
use crate::repositories::quote_repository::{NewQuote, QuoteRepository};
use crate::utils::errors::AppError;
use crate::utils::validation::parse_date;

const UNSPECIFIED_LOCATION: &str = "Not specified";

pub struct QuoteController {
    repository: QuoteRepository,
}

impl QuoteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: QuoteRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateQuoteRequest) -> Result<QuoteResponse, AppError> {
        let pickup_date = parse_date("pickup_date", &request.pickup_date)?;
        let dropoff_date = parse_date("dropoff_date", &request.dropoff_date)?;

        let quote = self
            .repository
            .create(NewQuote {
                client_id: request.client_id,
                pickup_location: request
                    .pickup_location
                    .unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string()),
                dropoff_location: request
                    .dropoff_location
                    .unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string()),
                pickup_date,
                dropoff_date,
                number_of_people: request.number_of_people,
            })
            .await?;

        Ok(QuoteResponse {
            success: true,
            quote,
        })
    }

    pub async fn list(&self) -> Result<QuotesResponse, AppError> {
        let quotes = self.repository.find_recent_with_client().await?;

        Ok(QuotesResponse {
            success: true,
            count: quotes.len(),
            quotes,
        })
    }

    pub async fn list_by_client(&self, client_id: Uuid) -> Result<ClientQuotesResponse, AppError> {
        let quotes = self.repository.find_by_client(client_id).await?;

        Ok(ClientQuotesResponse {
            success: true,
            count: quotes.len(),
            quotes,
        })
    }
}
