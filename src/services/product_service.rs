//! Casos de uso del catálogo

use std::sync::Arc;

use crate::models::filters::{build_effective_filter, FilterDefaults, Paginated};
use crate::models::product::{Product, ProductFilters};
use crate::repositories::ProductRepository;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    defaults: FilterDefaults,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, defaults: FilterDefaults) -> Self {
        Self { repository, defaults }
    }

    pub async fn list(&self, filters: &ProductFilters) -> AppResult<Paginated<Product>> {
        let effective = build_effective_filter(filters, &self.defaults);
        self.repository.list(&effective).await
    }
}
