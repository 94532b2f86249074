//! Repositorio de productos (servicio de catálogo)

use async_trait::async_trait;

use crate::clients::backend_client::BackendClient;
use crate::dto::common_dto::BackendPage;
use crate::dto::product_dto::BackendProduct;
use crate::mappers::product_mapper::map_products_page;
use crate::models::filters::Paginated;
use crate::models::product::{Product, ProductFilters};
use crate::utils::errors::AppResult;
use crate::utils::query::ToQueryParams;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self, filters: &ProductFilters) -> AppResult<Paginated<Product>>;
}

pub struct HttpProductRepository {
    client: BackendClient,
}

impl HttpProductRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductRepository for HttpProductRepository {
    async fn list(&self, filters: &ProductFilters) -> AppResult<Paginated<Product>> {
        let page: BackendPage<BackendProduct> = self
            .client
            .get_json("products", &filters.to_query_params())
            .await?;
        Ok(map_products_page(page))
    }
}
