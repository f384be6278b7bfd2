//! Estado de vista del widget
//!
//! Un único valor inmutable que se reemplaza entero en cada transición.
//! El tagged union hace imposibles los estados parciales inválidos:
//! no existe una vista de booking sin vehículo seleccionado.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleSearchResult;

/// Parámetros de la estadía capturados en el formulario de búsqueda
#[derive(Debug, Clone)]
pub struct StaySearchParams {
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub number_of_people: i32,
}

/// Datos de contacto del huésped
#[derive(Debug, Clone)]
pub struct GuestDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Vista actual del widget
#[derive(Debug, Clone)]
pub enum WidgetView {
    /// Formulario de búsqueda (vista inicial)
    Search,
    /// Resultados de la última búsqueda
    Results {
        params: StaySearchParams,
        vehicles: Vec<VehicleSearchResult>,
    },
    /// Formulario de reserva para el vehículo elegido. Conserva los
    /// resultados para que la vuelta atrás no repita el request.
    Booking {
        params: StaySearchParams,
        vehicles: Vec<VehicleSearchResult>,
        selected: VehicleSearchResult,
    },
    /// Confirmación terminal de la reserva creada
    Confirmed {
        booking_id: Uuid,
        guest_email: String,
    },
}

impl WidgetView {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetView::Search => "search",
            WidgetView::Results { .. } => "results",
            WidgetView::Booking { .. } => "booking",
            WidgetView::Confirmed { .. } => "confirmed",
        }
    }
}
