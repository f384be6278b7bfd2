use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::quote_controller::QuoteController;
use crate::dto::quote_dto::{ClientQuotesResponse, CreateQuoteRequest, QuoteResponse, QuotesResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_quote))
        .route("/", get(list_quotes))
        .route("/client/:client_id", get(list_client_quotes))
}

async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<CreateQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteResponse>), AppError> {
    let controller = QuoteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_quotes(State(state): State<AppState>) -> Result<Json<QuotesResponse>, AppError> {
    let controller = QuoteController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_client_quotes(
    State(state): State<AppState>,
    Path(client_id): Path<Uuid>,
) -> Result<Json<ClientQuotesResponse>, AppError> {
    let controller = QuoteController::new(state.pool.clone());
    let response = controller.list_by_client(client_id).await?;
    Ok(Json(response))
}
