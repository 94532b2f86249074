use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::product_controller::ProductController;
use crate::models::filters::Paginated;
use crate::models::product::{Product, ProductFilters};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_product_router() -> Router<AppState> {
    Router::new().route("/", get(list_products))
}

async fn list_products(
    State(state): State<AppState>,
    filters: Result<Query<ProductFilters>, QueryRejection>,
) -> Result<Json<Paginated<Product>>, AppError> {
    let Query(filters) = filters?;
    let controller = ProductController::new(&state);
    Ok(Json(controller.list(filters).await?))
}
