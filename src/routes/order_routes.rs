use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};

use crate::controllers::order_controller::OrderController;
use crate::dto::common_dto::ApiResponse;
use crate::models::filters::Paginated;
use crate::models::order::{BulkUpdateOrdersRequest, BulkUpdateResult, GetOrdersFilters, Order, UpdateOrderStatusRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/bulk-update", patch(bulk_update_orders))
        .route("/:id", get(get_order).patch(update_order_status))
        .route("/:id/confirm", post(confirm_order))
}

async fn list_orders(
    State(state): State<AppState>,
    filters: Result<Query<GetOrdersFilters>, QueryRejection>,
) -> Result<Json<Paginated<Order>>, AppError> {
    let Query(filters) = filters?;
    let controller = OrderController::new(&state);
    Ok(Json(controller.list(filters).await?))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let controller = OrderController::new(&state);
    Ok(Json(controller.get(&id).await?))
}

async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let controller = OrderController::new(&state);
    Ok(Json(controller.update_status(&id, request).await?))
}

async fn confirm_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let controller = OrderController::new(&state);
    Ok(Json(controller.confirm(&id).await?))
}

async fn bulk_update_orders(
    State(state): State<AppState>,
    Json(request): Json<BulkUpdateOrdersRequest>,
) -> Result<Json<ApiResponse<BulkUpdateResult>>, AppError> {
    let controller = OrderController::new(&state);
    Ok(Json(controller.bulk_update(request).await?))
}
