//! Repositorio de rutas (servicio de logística)

use async_trait::async_trait;

use crate::clients::backend_client::BackendClient;
use crate::dto::route_dto::{BackendGenerateRoutesRequest, BackendGenerateRoutesResponse, BackendRouteList};
use crate::mappers::route_mapper::{map_delivery_route, map_generate_routes_response};
use crate::models::route::{DeliveryRoute, GenerateRoutesResult, RouteListFilters};
use crate::utils::errors::{backend_message, AppError, AppResult, ROUTE_CONFLICT_MESSAGE};
use crate::utils::query::ToQueryParams;

#[async_trait]
pub trait RouteRepository: Send + Sync {
    async fn generate(&self, request: &BackendGenerateRoutesRequest) -> AppResult<GenerateRoutesResult>;
    async fn list(&self, filters: &RouteListFilters) -> AppResult<Vec<DeliveryRoute>>;
}

pub struct HttpRouteRepository {
    client: BackendClient,
}

impl HttpRouteRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

/// Un 409 al generar significa rutas ya existentes para esos pedidos
pub fn translate_generation_error(err: AppError) -> AppError {
    match err {
        AppError::Backend { status: 409, body } => {
            let message = backend_message(&body).unwrap_or_else(|| ROUTE_CONFLICT_MESSAGE.to_string());
            AppError::Conflict(message)
        }
        other => other,
    }
}

#[async_trait]
impl RouteRepository for HttpRouteRepository {
    async fn generate(&self, request: &BackendGenerateRoutesRequest) -> AppResult<GenerateRoutesResult> {
        let response: BackendGenerateRoutesResponse = self
            .client
            .post_json("routes/generate", request)
            .await
            .map_err(translate_generation_error)?;
        Ok(map_generate_routes_response(response))
    }

    async fn list(&self, filters: &RouteListFilters) -> AppResult<Vec<DeliveryRoute>> {
        let list: BackendRouteList = self.client.get_json("routes", &filters.to_query_params()).await?;
        Ok(list.routes.into_iter().map(map_delivery_route).collect())
    }
}
