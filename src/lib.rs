//! MediSupply Admin Gateway
//!
//! Capa entre la UI de administración y los microservicios de catálogo,
//! logística y ventas: DTOs del backend, mappers al dominio, construcción
//! de filtros, estado de vistas y un BFF HTTP sobre axum.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod mappers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod search;
pub mod services;
pub mod state;
pub mod utils;
pub mod view_state;

use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware_with_origins;
use crate::state::AppState;

/// Máximo de requests atendidos en paralelo hacia los backends
pub const MAX_CONCURRENT_REQUESTS: usize = 256;

/// Router completo con middleware y estado
pub fn build_app(state: AppState) -> Router {
    let cors = cors_middleware_with_origins(&state.config.cors_origins);

    routes::create_app_router()
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
