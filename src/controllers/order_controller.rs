use crate::dto::common_dto::ApiResponse;
use crate::models::filters::Paginated;
use crate::models::order::{BulkUpdateOrdersRequest, BulkUpdateResult, GetOrdersFilters, Order, UpdateOrderStatusRequest};
use crate::services::OrderService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct OrderController {
    service: OrderService,
}

impl OrderController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: state.orders.clone(),
        }
    }

    pub async fn list(&self, filters: GetOrdersFilters) -> Result<Paginated<Order>, AppError> {
        self.service.list(&filters).await
    }

    pub async fn get(&self, id: &str) -> Result<Order, AppError> {
        self.service.get(id).await
    }

    pub async fn update_status(
        &self,
        id: &str,
        request: UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<Order>, AppError> {
        let order = self.service.update_status(id, request.status).await?;
        Ok(ApiResponse::success_with_message(
            order,
            format!("Pedido actualizado a '{}'", request.status),
        ))
    }

    pub async fn confirm(&self, id: &str) -> Result<ApiResponse<Order>, AppError> {
        let order = self.service.confirm(id).await?;
        Ok(ApiResponse::success_with_message(order, "Pedido confirmado exitosamente"))
    }

    pub async fn bulk_update(
        &self,
        request: BulkUpdateOrdersRequest,
    ) -> Result<ApiResponse<BulkUpdateResult>, AppError> {
        let result = self.service.bulk_update(&request).await?;
        let message = format!("{} pedidos actualizados", result.updated_count);
        Ok(ApiResponse::success_with_message(result, message))
    }
}
