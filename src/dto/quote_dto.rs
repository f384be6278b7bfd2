use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::quote::Quote;
use crate::repositories::quote_repository::QuoteWithClient;

// Request para registrar una búsqueda como quote. Las ubicaciones
// ausentes se guardan como "Not specified".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuoteRequest {
    pub client_id: Uuid,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub pickup_date: String,
    pub dropoff_date: String,
    pub number_of_people: Option<i32>,
}

// Response de creación (201)
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub success: bool,
    pub quote: Quote,
}

// Response del listado global (analítica, últimos 100)
#[derive(Debug, Serialize, Deserialize)]
pub struct QuotesResponse {
    pub success: bool,
    pub count: usize,
    pub quotes: Vec<QuoteWithClient>,
}

// Response del listado por client
#[derive(Debug, Serialize, Deserialize)]
pub struct ClientQuotesResponse {
    pub success: bool,
    pub count: usize,
    pub quotes: Vec<Quote>,
}
