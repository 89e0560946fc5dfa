//! Seed endpoint handler.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create seed routes
pub fn seed_routes() -> Router<AppState> {
    Router::new().route("/", get(run_seed))
}

/// Reset the catalog and load the fixture products
#[utoipa::path(
    get,
    path = "/seed",
    tag = "Seed",
    responses(
        (status = 200, description = "Seed executed", body = MessageResponse),
        (status = 500, description = "Seeding failed")
    )
)]
pub async fn run_seed(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    let message = state.seed_service.run_seed().await?;

    Ok(Json(MessageResponse::new(message)))
}
