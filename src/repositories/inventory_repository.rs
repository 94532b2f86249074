//! Repositorio de inventario (servicio de logística)

use async_trait::async_trait;

use crate::clients::backend_client::BackendClient;
use crate::dto::inventory_dto::{BackendProductLocationResponse, BackendStockLevelsResponse};
use crate::mappers::inventory_mapper::{map_product_location_response, map_stock_level};
use crate::models::inventory::{
    ProductLocationQueryParams, ProductLocationResult, StockLevel, StockLevelsQuery,
};
use crate::utils::errors::AppResult;
use crate::utils::query::ToQueryParams;

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn product_location(&self, params: &ProductLocationQueryParams) -> AppResult<ProductLocationResult>;
    async fn stock_levels(&self, query: &StockLevelsQuery) -> AppResult<Vec<StockLevel>>;
}

pub struct HttpInventoryRepository {
    client: BackendClient,
}

impl HttpInventoryRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InventoryRepository for HttpInventoryRepository {
    async fn product_location(&self, params: &ProductLocationQueryParams) -> AppResult<ProductLocationResult> {
        let response: BackendProductLocationResponse = self
            .client
            .get_json("inventory/product-location", &params.to_query_params())
            .await?;
        Ok(map_product_location_response(response))
    }

    async fn stock_levels(&self, query: &StockLevelsQuery) -> AppResult<Vec<StockLevel>> {
        let response: BackendStockLevelsResponse = self
            .client
            .get_json("inventory/stock-levels", &query.to_query_params())
            .await?;
        Ok(response.stock_levels.into_iter().map(map_stock_level).collect())
    }
}
