use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::inventory_controller::InventoryController;
use crate::models::inventory::{ProductLocationQueryParams, ProductLocationResult, StockLevel, StockLevelsQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_inventory_router() -> Router<AppState> {
    Router::new()
        .route("/product-location", get(product_location))
        .route("/stock-levels", get(stock_levels))
}

async fn product_location(
    State(state): State<AppState>,
    params: Result<Query<ProductLocationQueryParams>, QueryRejection>,
) -> Result<Json<ProductLocationResult>, AppError> {
    let Query(params) = params?;
    let controller = InventoryController::new(&state);
    Ok(Json(controller.product_location(params).await?))
}

async fn stock_levels(
    State(state): State<AppState>,
    query: Result<Query<StockLevelsQuery>, QueryRejection>,
) -> Result<Json<Vec<StockLevel>>, AppError> {
    let Query(query) = query?;
    let controller = InventoryController::new(&state);
    Ok(Json(controller.stock_levels(query).await?))
}
