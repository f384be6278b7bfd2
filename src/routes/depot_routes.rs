use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::depot_controller::DepotController;
use crate::dto::depot_dto::DepotsResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_depot_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_depots))
        .route("/city/:city", get(list_depots_by_city))
}

async fn list_depots(State(state): State<AppState>) -> Result<Json<DepotsResponse>, AppError> {
    let controller = DepotController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_depots_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<DepotsResponse>, AppError> {
    let controller = DepotController::new(state.pool.clone());
    let response = controller.list_by_city(&city).await?;
    Ok(Json(response))
}
