use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::logistics_controller::LogisticsController;
use crate::models::vehicle::{AvailableVehiclesQuery, Vehicle};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new().route("/available", get(available_vehicles))
}

async fn available_vehicles(
    State(state): State<AppState>,
    query: Result<Query<AvailableVehiclesQuery>, QueryRejection>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let Query(query) = query?;
    let controller = LogisticsController::new(&state);
    Ok(Json(controller.available_vehicles(query).await?))
}
