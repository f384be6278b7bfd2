//! Controller de depots

use sqlx::PgPool;

use crate::dto::depot_dto::DepotsResponse;
use crate::repositories::depot_repository::DepotRepository;
use crate::utils::errors::AppError;

pub struct DepotController {
    repository: DepotRepository,
}

impl DepotController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DepotRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<DepotsResponse, AppError> {
        let depots = self.repository.find_all_with_operator().await?;

        Ok(DepotsResponse {
            success: true,
            count: depots.len(),
            depots,
        })
    }

    pub async fn list_by_city(&self, city: &str) -> Result<DepotsResponse, AppError> {
        let depots = self.repository.find_by_city(city).await?;

        Ok(DepotsResponse {
            success: true,
            count: depots.len(),
            depots,
        })
    }
}
