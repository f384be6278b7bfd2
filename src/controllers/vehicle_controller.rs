//! Controller de vehículos
//!
//! Orquesta la búsqueda: valida fechas, trae el conjunto candidato,
//! aplica los predicados en memoria y anota cada resultado con el
//! pricing de la estadía.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::{SearchVehiclesResponse, VehicleDetailResponse, VehicleSearchQuery, VehicleSearchResult};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::{pricing_service, vehicle_filter};
use crate::utils::errors::AppError;
use crate::utils::validation::parse_date;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn search(&self, query: VehicleSearchQuery) -> Result<SearchVehiclesResponse, AppError> {
        let pickup = parse_date("pickup_date", &query.pickup_date)?;
        let dropoff = parse_date("dropoff_date", &query.dropoff_date)?;
        let days = pricing_service::rental_days(pickup, dropoff);

        let candidates = self.repository.find_all_with_operator().await?;
        let matched = vehicle_filter::apply(&query.filters(), candidates);

        let vehicles: Vec<VehicleSearchResult> = matched
            .into_iter()
            .map(|vehicle| {
                let total_price = pricing_service::total_price(vehicle.price_per_day, days);
                VehicleSearchResult {
                    vehicle,
                    total_price,
                    days,
                }
            })
            .collect();

        Ok(SearchVehiclesResponse {
            success: true,
            count: vehicles.len(),
            vehicles,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id_with_operator(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(VehicleDetailResponse {
            success: true,
            vehicle,
        })
    }
}
