//! Cliente HTTP del widget
//!
//! La superficie de la API que consume el widget, detrás de un trait
//! para que los tests sustituyan un fake. La implementación real usa
//! reqwest contra el servidor de booking.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::dto::booking_dto::{CreateBookingRequest, CreateBookingResponse};
use crate::dto::client_dto::{ClientConfig, ClientConfigResponse};
use crate::dto::depot_dto::DepotsResponse;
use crate::dto::quote_dto::CreateQuoteRequest;
use crate::dto::vehicle_dto::{SearchVehiclesResponse, VehicleSearchResult};
use crate::models::booking::Booking;
use crate::repositories::depot_repository::DepotWithOperator;
use crate::services::vehicle_filter::VehicleFilters;
use crate::widget::view_state::StaySearchParams;

/// Intentos del probe de conectividad inicial
pub const PROBE_ATTEMPTS: u32 = 3;
/// Espera fija entre intentos del probe
pub const PROBE_RETRY_DELAY: Duration = Duration::from_secs(2);
/// Timeout por request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errores del lado del widget
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("booking service is unreachable")]
    Connectivity,

    #[error("api error: {0}")]
    Api(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid action for the current view: {0}")]
    State(&'static str),
}

/// Superficie de la API consumida por el widget
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn health(&self) -> Result<(), WidgetError>;

    async fn client_config(&self, client_id: Uuid) -> Result<ClientConfig, WidgetError>;

    /// Registro analítico de la búsqueda. El caller lo trata como
    /// best-effort: un error acá nunca frena la búsqueda.
    async fn track_quote(&self, request: &CreateQuoteRequest) -> Result<(), WidgetError>;

    async fn search_vehicles(
        &self,
        params: &StaySearchParams,
        filters: &VehicleFilters,
    ) -> Result<Vec<VehicleSearchResult>, WidgetError>;

    async fn list_depots(&self) -> Result<Vec<DepotWithOperator>, WidgetError>;

    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, WidgetError>;
}

/// Implementación real contra el servidor de booking
pub struct HttpBookingApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBookingApi {
    /// `base_url` es la raíz del servidor (sin /api)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn health(&self) -> Result<(), WidgetError> {
        self.http
            .get(self.url("/health"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn client_config(&self, client_id: Uuid) -> Result<ClientConfig, WidgetError> {
        let response: ClientConfigResponse = self
            .http
            .get(self.url(&format!("/api/clients/{}/config", client_id)))
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(WidgetError::Api("failed to load client config".to_string()));
        }
        Ok(response.config)
    }

    async fn track_quote(&self, request: &CreateQuoteRequest) -> Result<(), WidgetError> {
        self.http
            .post(self.url("/api/quotes"))
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn search_vehicles(
        &self,
        params: &StaySearchParams,
        filters: &VehicleFilters,
    ) -> Result<Vec<VehicleSearchResult>, WidgetError> {
        let mut query: Vec<(&str, String)> = vec![
            ("pickup_date", params.pickup_date.to_string()),
            ("dropoff_date", params.dropoff_date.to_string()),
            ("number_of_people", params.number_of_people.to_string()),
        ];

        if let Some(transmission) = filters.transmission {
            query.push(("transmission", transmission.to_string()));
        }
        if let Some(min_sleeps) = filters.min_sleeps {
            query.push(("min_sleeps", min_sleeps.to_string()));
        }
        if filters.has_toilet == Some(true) {
            query.push(("has_toilet", "true".to_string()));
        }
        if filters.has_shower == Some(true) {
            query.push(("has_shower", "true".to_string()));
        }
        if let Some(vehicle_type) = filters.vehicle_type {
            query.push(("vehicle_type", vehicle_type.to_string()));
        }
        if let Some(max_price) = filters.max_price {
            query.push(("max_price", max_price.to_string()));
        }

        let response: SearchVehiclesResponse = self
            .http
            .get(self.url("/api/vehicles/search"))
            .query(&query)
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(WidgetError::Api("vehicle search failed".to_string()));
        }
        Ok(response.vehicles)
    }

    async fn list_depots(&self) -> Result<Vec<DepotWithOperator>, WidgetError> {
        let response: DepotsResponse = self
            .http
            .get(self.url("/api/depots"))
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(WidgetError::Api("failed to load depots".to_string()));
        }
        Ok(response.depots)
    }

    async fn create_booking(&self, request: &CreateBookingRequest) -> Result<Booking, WidgetError> {
        let response: CreateBookingResponse = self
            .http
            .post(self.url("/api/bookings"))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(WidgetError::Api("failed to create booking".to_string()));
        }
        Ok(response.booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpBookingApi::new("http://localhost:3000/");
        assert_eq!(api.url("/health"), "http://localhost:3000/health");
    }
}
