use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::logistics_controller::LogisticsController;
use crate::dto::common_dto::ApiResponse;
use crate::models::route::{DeliveryRoute, GenerateRoutesRequest, GenerateRoutesResult, RouteListFilters};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_delivery_route_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routes))
        .route("/generate", post(generate_routes))
}

async fn list_routes(
    State(state): State<AppState>,
    filters: Result<Query<RouteListFilters>, QueryRejection>,
) -> Result<Json<Vec<DeliveryRoute>>, AppError> {
    let Query(filters) = filters?;
    let controller = LogisticsController::new(&state);
    Ok(Json(controller.list_routes(filters).await?))
}

async fn generate_routes(
    State(state): State<AppState>,
    Json(request): Json<GenerateRoutesRequest>,
) -> Result<Json<ApiResponse<GenerateRoutesResult>>, AppError> {
    let controller = LogisticsController::new(&state);
    Ok(Json(controller.generate_routes(request).await?))
}
