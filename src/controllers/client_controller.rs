//! Controller de configuración de clients white-label

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::client_dto::{ClientConfig, ClientConfigResponse};
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::AppError;

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn get_config(&self, client_id: Uuid) -> Result<ClientConfigResponse, AppError> {
        let client = self
            .repository
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

        Ok(ClientConfigResponse {
            success: true,
            config: ClientConfig::from(client),
        })
    }
}
