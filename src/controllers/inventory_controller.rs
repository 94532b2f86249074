use crate::models::inventory::{ProductLocationQueryParams, ProductLocationResult, StockLevel, StockLevelsQuery};
use crate::services::InventoryService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct InventoryController {
    service: InventoryService,
}

impl InventoryController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: state.inventory.clone(),
        }
    }

    pub async fn product_location(
        &self,
        params: ProductLocationQueryParams,
    ) -> Result<ProductLocationResult, AppError> {
        self.service.product_location(params).await
    }

    pub async fn stock_levels(&self, query: StockLevelsQuery) -> Result<Vec<StockLevel>, AppError> {
        self.service.stock_levels(&query).await
    }
}
