//! Casos de uso de pedidos

use std::sync::Arc;

use validator::Validate;

use crate::models::filters::{build_effective_filter, FilterDefaults, Paginated};
use crate::models::order::{BulkUpdateOrdersRequest, BulkUpdateResult, GetOrdersFilters, Order, OrderStatus};
use crate::repositories::OrderRepository;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::non_empty;

#[derive(Clone)]
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
    defaults: FilterDefaults,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>, defaults: FilterDefaults) -> Self {
        Self { repository, defaults }
    }

    /// Listar pedidos; página y tamaño se completan aquí
    pub async fn list(&self, filters: &GetOrdersFilters) -> AppResult<Paginated<Order>> {
        let effective = build_effective_filter(filters, &self.defaults);
        log::info!(
            "📋 Listando pedidos (página {:?}, {:?} por página)",
            effective.page,
            effective.per_page
        );
        self.repository.list(&effective).await
    }

    pub async fn get(&self, id: &str) -> AppResult<Order> {
        let id = required_id(id)?;
        self.repository.get(id).await
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let id = required_id(id)?;
        log::info!("🔄 Pedido {} → {}", id, status);
        self.repository.update_status(id, status).await
    }

    pub async fn confirm(&self, id: &str) -> AppResult<Order> {
        self.update_status(id, OrderStatus::Confirmed).await
    }

    pub async fn bulk_update(&self, request: &BulkUpdateOrdersRequest) -> AppResult<BulkUpdateResult> {
        request.validate()?;
        log::info!(
            "🔄 Actualización masiva de {} pedidos → {}",
            request.order_ids.len(),
            request.status
        );
        let result = self.repository.bulk_update(request).await?;
        log::info!("✅ {} pedidos actualizados", result.updated_count);
        Ok(result)
    }
}

fn required_id(id: &str) -> AppResult<&str> {
    non_empty(Some(id)).ok_or_else(|| validation_error("El id del pedido es requerido"))
}
