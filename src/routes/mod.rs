//! Rutas HTTP del gateway
//!
//! `create_app_router` arma el router completo; `main` solo le agrega
//! las capas de middleware y el estado.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub mod delivery_routes;
pub mod inventory_routes;
pub mod order_routes;
pub mod product_routes;
pub mod vehicle_routes;

pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/orders", order_routes::create_order_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/routes", delivery_routes::create_delivery_route_router())
        .nest("/api/inventory", inventory_routes::create_inventory_router())
        .nest("/api/products", product_routes::create_product_router())
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
