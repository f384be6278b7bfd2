use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::vehicle::{Transmission, VehicleType};
use crate::repositories::vehicle_repository::VehicleWithOperator;
use crate::services::vehicle_filter::VehicleFilters;

// Query params de la búsqueda. Las fechas llegan como texto y se
// validan en el controller; los predicados ausentes no restringen.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleSearchQuery {
    pub pickup_date: String,
    pub dropoff_date: String,
    // Aceptado por contrato pero sin predicado asociado todavía
    pub number_of_people: Option<i32>,
    pub transmission: Option<Transmission>,
    pub min_sleeps: Option<i32>,
    pub has_toilet: Option<bool>,
    pub has_shower: Option<bool>,
    pub vehicle_type: Option<VehicleType>,
    pub max_price: Option<Decimal>,
}

impl VehicleSearchQuery {
    pub fn filters(&self) -> VehicleFilters {
        VehicleFilters {
            transmission: self.transmission,
            min_sleeps: self.min_sleeps,
            has_toilet: self.has_toilet,
            has_shower: self.has_shower,
            vehicle_type: self.vehicle_type,
            max_price: self.max_price,
        }
    }
}

// Vehículo anotado con el pricing de la estadía pedida
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSearchResult {
    #[serde(flatten)]
    pub vehicle: VehicleWithOperator,
    pub total_price: Decimal,
    pub days: i64,
}

// Response de búsqueda
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchVehiclesResponse {
    pub success: bool,
    pub count: usize,
    pub vehicles: Vec<VehicleSearchResult>,
}

// Response de lookup individual
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleDetailResponse {
    pub success: bool,
    pub vehicle: VehicleWithOperator,
}
