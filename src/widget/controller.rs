//! Controller del widget de booking
//!
//! Maneja el flujo search → results → booking → confirmed sobre un
//! estado de vista único. Cada transición dispara a lo sumo un request
//! primario y re-renderiza sincrónicamente con la respuesta. No hay
//! debounce ni cancelación de requests en vuelo.

use uuid::Uuid;

use crate::dto::booking_dto::CreateBookingRequest;
use crate::dto::client_dto::ClientConfig;
use crate::dto::quote_dto::CreateQuoteRequest;
use crate::services::vehicle_filter::VehicleFilters;
use crate::widget::api_client::{BookingApi, WidgetError, PROBE_ATTEMPTS, PROBE_RETRY_DELAY};
use crate::widget::render;
use crate::widget::view_state::{GuestDetails, StaySearchParams, WidgetView};

pub struct BookingWidget<A: BookingApi> {
    api: A,
    client_id: Uuid,
    client_config: Option<ClientConfig>,
    view: WidgetView,
}

impl<A: BookingApi> BookingWidget<A> {
    pub fn new(api: A, client_id: Uuid) -> Self {
        Self {
            api,
            client_id,
            client_config: None,
            view: WidgetView::Search,
        }
    }

    /// Probe de conectividad + carga del tema + render inicial.
    /// Un fallo de conectividad es terminal: el host muestra
    /// `render::connection_failed()` y no hay recuperación sin re-init.
    pub async fn init(&mut self) -> Result<String, WidgetError> {
        self.wait_for_api().await?;

        // El tema es opcional: sin config se renderiza con los defaults
        match self.api.client_config(self.client_id).await {
            Ok(config) => self.client_config = Some(config),
            Err(e) => log::error!("Failed to load client config: {}", e),
        }

        Ok(self.render())
    }

    async fn wait_for_api(&self) -> Result<(), WidgetError> {
        for attempt in 1..=PROBE_ATTEMPTS {
            match self.api.health().await {
                Ok(()) => {
                    log::info!("API connected");
                    return Ok(());
                }
                Err(e) => {
                    log::info!("API not ready, attempt {}/{}: {}", attempt, PROBE_ATTEMPTS, e);
                    if attempt < PROBE_ATTEMPTS {
                        tokio::time::sleep(PROBE_RETRY_DELAY).await;
                    }
                }
            }
        }

        Err(WidgetError::Connectivity)
    }

    /// search → results. El quote se registra primero, best-effort.
    pub async fn search(
        &mut self,
        params: StaySearchParams,
        filters: VehicleFilters,
    ) -> Result<String, WidgetError> {
        let quote = CreateQuoteRequest {
            client_id: self.client_id,
            pickup_location: None,
            dropoff_location: None,
            pickup_date: params.pickup_date.to_string(),
            dropoff_date: params.dropoff_date.to_string(),
            number_of_people: Some(params.number_of_people),
        };
        if let Err(e) = self.api.track_quote(&quote).await {
            log::warn!("Failed to track quote: {}", e);
        }

        let vehicles = self.api.search_vehicles(&params, &filters).await?;
        self.view = WidgetView::Results { params, vehicles };
        Ok(self.render())
    }

    /// results → booking. Transición offline: el vehículo ya está en
    /// el resultado cargado.
    pub fn select_vehicle(&mut self, vehicle_id: Uuid) -> Result<String, WidgetError> {
        let (params, vehicles) = match &self.view {
            WidgetView::Results { params, vehicles } => (params.clone(), vehicles.clone()),
            _ => return Err(WidgetError::State("select_vehicle requires the results view")),
        };

        let selected = vehicles
            .iter()
            .find(|v| v.vehicle.id == vehicle_id)
            .cloned()
            .ok_or(WidgetError::State("vehicle is not part of the current results"))?;

        self.view = WidgetView::Booking {
            params,
            vehicles,
            selected,
        };
        Ok(self.render())
    }

    /// booking → confirmed. El primer depot del listado se usa como
    /// pickup y dropoff.
    pub async fn submit_booking(&mut self, guest: GuestDetails) -> Result<String, WidgetError> {
        let (params, selected) = match &self.view {
            WidgetView::Booking { params, selected, .. } => (params.clone(), selected.clone()),
            _ => return Err(WidgetError::State("submit_booking requires the booking view")),
        };

        let depots = self.api.list_depots().await?;
        let depot = depots
            .first()
            .ok_or_else(|| WidgetError::Api("no depots available".to_string()))?;

        let request = CreateBookingRequest {
            client_id: self.client_id,
            vehicle_id: selected.vehicle.id,
            pickup_depot_id: depot.id,
            dropoff_depot_id: depot.id,
            pickup_date: params.pickup_date.to_string(),
            dropoff_date: params.dropoff_date.to_string(),
            guest_name: guest.name,
            guest_email: guest.email,
            guest_phone: guest.phone,
            number_of_people: params.number_of_people,
        };

        let booking = self.api.create_booking(&request).await?;
        self.view = WidgetView::Confirmed {
            booking_id: booking.id,
            guest_email: booking.guest_email,
        };
        Ok(self.render())
    }

    /// Navegación explícita hacia atrás: cualquier vista → search
    pub fn back_to_search(&mut self) -> String {
        self.view = WidgetView::Search;
        self.render()
    }

    /// booking → results sin repetir la búsqueda
    pub fn back_to_results(&mut self) -> Result<String, WidgetError> {
        let (params, vehicles) = match &self.view {
            WidgetView::Booking { params, vehicles, .. } => (params.clone(), vehicles.clone()),
            _ => return Err(WidgetError::State("back_to_results requires the booking view")),
        };

        self.view = WidgetView::Results { params, vehicles };
        Ok(self.render())
    }

    pub fn view(&self) -> &WidgetView {
        &self.view
    }

    /// Renderizar la vista actual con el tema cargado
    pub fn render(&self) -> String {
        let theme = self.client_config.as_ref().map(|c| &c.theme);
        match &self.view {
            WidgetView::Search => render::search_form(theme),
            WidgetView::Results { params, vehicles } => render::results(theme, params, vehicles),
            WidgetView::Booking { params, selected, .. } => {
                render::booking_form(theme, params, selected)
            }
            WidgetView::Confirmed {
                booking_id,
                guest_email,
            } => render::confirmation(theme, *booking_id, guest_email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::client_dto::ThemeConfig;
    use crate::dto::vehicle_dto::VehicleSearchResult;
    use crate::models::booking::{Booking, BookingStatus};
    use crate::models::vehicle::{Transmission, VehicleType};
    use crate::repositories::depot_repository::DepotWithOperator;
    use crate::repositories::vehicle_repository::VehicleWithOperator;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FakeApi {
        fail_health: bool,
        fail_quote: bool,
        vehicles: Vec<VehicleSearchResult>,
        health_calls: AtomicU32,
        quote_calls: AtomicU32,
        search_calls: AtomicU32,
    }

    impl FakeApi {
        fn new(vehicles: Vec<VehicleSearchResult>) -> Self {
            Self {
                fail_health: false,
                fail_quote: false,
                vehicles,
                health_calls: AtomicU32::new(0),
                quote_calls: AtomicU32::new(0),
                search_calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl BookingApi for FakeApi {
        async fn health(&self) -> Result<(), WidgetError> {
            self.health_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_health {
                return Err(WidgetError::Api("unavailable".to_string()));
            }
            Ok(())
        }

        async fn client_config(&self, client_id: Uuid) -> Result<ClientConfig, WidgetError> {
            Ok(ClientConfig {
                id: client_id,
                name: "Roam Free Rentals".to_string(),
                theme: ThemeConfig {
                    primary_color: "#ff6b35".to_string(),
                    secondary_color: "#004e89".to_string(),
                },
            })
        }

        async fn track_quote(&self, _request: &CreateQuoteRequest) -> Result<(), WidgetError> {
            self.quote_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_quote {
                return Err(WidgetError::Api("quote endpoint unreachable".to_string()));
            }
            Ok(())
        }

        async fn search_vehicles(
            &self,
            _params: &StaySearchParams,
            _filters: &VehicleFilters,
        ) -> Result<Vec<VehicleSearchResult>, WidgetError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.vehicles.clone())
        }

        async fn list_depots(&self) -> Result<Vec<DepotWithOperator>, WidgetError> {
            Ok(vec![DepotWithOperator {
                id: Uuid::new_v4(),
                operator_id: Uuid::new_v4(),
                name: "Airport Depot".to_string(),
                city: "Auckland".to_string(),
                country: "New Zealand".to_string(),
                latitude: -37.0082,
                longitude: 174.785,
                created_at: Utc::now(),
                operator_name: "Coastal Campers".to_string(),
            }])
        }

        async fn create_booking(
            &self,
            request: &CreateBookingRequest,
        ) -> Result<Booking, WidgetError> {
            Ok(Booking {
                id: Uuid::new_v4(),
                client_id: request.client_id,
                vehicle_id: request.vehicle_id,
                operator_id: Uuid::new_v4(),
                pickup_depot_id: request.pickup_depot_id,
                dropoff_depot_id: request.dropoff_depot_id,
                pickup_date: NaiveDate::parse_from_str(&request.pickup_date, "%Y-%m-%d").unwrap(),
                dropoff_date: NaiveDate::parse_from_str(&request.dropoff_date, "%Y-%m-%d").unwrap(),
                guest_name: request.guest_name.clone(),
                guest_email: request.guest_email.clone(),
                guest_phone: request.guest_phone.clone(),
                number_of_people: request.number_of_people,
                total_price: Decimal::new(300, 0),
                status: BookingStatus::Pending,
                created_at: Utc::now(),
            })
        }
    }

    fn sample_result(name: &str, price: i64) -> VehicleSearchResult {
        VehicleSearchResult {
            vehicle: VehicleWithOperator {
                id: Uuid::new_v4(),
                operator_id: Uuid::new_v4(),
                name: name.to_string(),
                vehicle_type: VehicleType::Campervan,
                transmission: Transmission::Manual,
                sleeps: 2,
                has_toilet: false,
                has_shower: false,
                has_kitchen: true,
                price_per_day: Decimal::new(price, 0),
                image_url: None,
                created_at: Utc::now(),
                operator_name: "Coastal Campers".to_string(),
                operator_code: "CC".to_string(),
            },
            total_price: Decimal::new(price * 3, 0),
            days: 3,
        }
    }

    fn params() -> StaySearchParams {
        StaySearchParams {
            pickup_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            dropoff_date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            number_of_people: 2,
        }
    }

    fn guest() -> GuestDetails {
        GuestDetails {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_exhaustion_is_terminal() {
        let mut api = FakeApi::new(vec![]);
        api.fail_health = true;
        let mut widget = BookingWidget::new(api, Uuid::new_v4());

        let result = widget.init().await;
        assert!(matches!(result, Err(WidgetError::Connectivity)));
        assert_eq!(widget.api.health_calls.load(Ordering::SeqCst), PROBE_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_quote_failure_does_not_block_search() {
        let mut api = FakeApi::new(vec![sample_result("Beach Hopper", 100)]);
        api.fail_quote = true;
        let mut widget = BookingWidget::new(api, Uuid::new_v4());

        let html = widget.search(params(), VehicleFilters::default()).await.unwrap();
        assert_eq!(widget.view().name(), "results");
        assert!(html.contains("Beach Hopper"));
        assert_eq!(widget.api.quote_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_full_booking_flow_reaches_confirmed() {
        let results = vec![sample_result("Beach Hopper", 100), sample_result("Surf Van", 80)];
        let vehicle_id = results[0].vehicle.id;
        let mut widget = BookingWidget::new(FakeApi::new(results), Uuid::new_v4());

        let html = widget.init().await.unwrap();
        assert_eq!(widget.view().name(), "search");
        // El tema del client quedó aplicado
        assert!(html.contains("#ff6b35"));

        widget.search(params(), VehicleFilters::default()).await.unwrap();
        assert_eq!(widget.view().name(), "results");

        widget.select_vehicle(vehicle_id).unwrap();
        assert_eq!(widget.view().name(), "booking");

        let html = widget.submit_booking(guest()).await.unwrap();
        assert_eq!(widget.view().name(), "confirmed");
        assert!(html.contains("Booking Confirmed!"));
        assert!(html.contains("jane@example.com"));
    }

    #[tokio::test]
    async fn test_select_vehicle_outside_results_is_rejected() {
        let mut widget = BookingWidget::new(FakeApi::new(vec![]), Uuid::new_v4());
        let result = widget.select_vehicle(Uuid::new_v4());
        assert!(matches!(result, Err(WidgetError::State(_))));
        assert_eq!(widget.view().name(), "search");
    }

    #[tokio::test]
    async fn test_back_to_results_does_not_search_again() {
        let results = vec![sample_result("Beach Hopper", 100)];
        let vehicle_id = results[0].vehicle.id;
        let mut widget = BookingWidget::new(FakeApi::new(results), Uuid::new_v4());

        widget.search(params(), VehicleFilters::default()).await.unwrap();
        widget.select_vehicle(vehicle_id).unwrap();
        let html = widget.back_to_results().unwrap();

        assert_eq!(widget.view().name(), "results");
        assert!(html.contains("Beach Hopper"));
        assert_eq!(widget.api.search_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_back_to_search_resets_the_view() {
        let mut widget = BookingWidget::new(FakeApi::new(vec![sample_result("Surf Van", 80)]), Uuid::new_v4());
        widget.search(params(), VehicleFilters::default()).await.unwrap();

        let html = widget.back_to_search();
        assert_eq!(widget.view().name(), "search");
        assert!(html.contains("Search Campervans"));
    }
}
