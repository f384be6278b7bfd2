use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::client_controller::ClientController;
use crate::dto::client_dto::ClientConfigResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_router() -> Router<AppState> {
    Router::new().route("/:client_id/config", get(get_client_config))
}

async fn get_client_config(
    State(state): State<AppState>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<ClientConfigResponse>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    let response = controller.get_config(client_id).await?;
    Ok(Json(response))
}
