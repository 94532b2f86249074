//! Repositorio de vehículos (servicio de logística)
//!
//! Devuelve el JSON crudo: la forma del envelope varía y la decodifica
//! `mappers::vehicle_mapper`.

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::backend_client::BackendClient;
use crate::models::vehicle::AvailableVehiclesQuery;
use crate::utils::errors::AppResult;
use crate::utils::query::ToQueryParams;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn available(&self, query: &AvailableVehiclesQuery) -> AppResult<Value>;
}

pub struct HttpVehicleRepository {
    client: BackendClient,
}

impl HttpVehicleRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VehicleRepository for HttpVehicleRepository {
    async fn available(&self, query: &AvailableVehiclesQuery) -> AppResult<Value> {
        self.client
            .get_value("vehicles/available", &query.to_query_params())
            .await
    }
}
