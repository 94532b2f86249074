use crate::models::filters::Paginated;
use crate::models::product::{Product, ProductFilters};
use crate::services::ProductService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct ProductController {
    service: ProductService,
}

impl ProductController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: state.products.clone(),
        }
    }

    pub async fn list(&self, filters: ProductFilters) -> Result<Paginated<Product>, AppError> {
        self.service.list(&filters).await
    }
}
