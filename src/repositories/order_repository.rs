//! Repositorio de pedidos (servicio de ventas)

use async_trait::async_trait;

use crate::clients::backend_client::{path_segment, BackendClient};
use crate::dto::common_dto::BackendPage;
use crate::dto::order_dto::{
    BackendBulkUpdateRequest, BackendBulkUpdateResponse, BackendOrder, BackendUpdateOrderStatusRequest,
};
use crate::mappers::order_mapper::{map_bulk_update_result, map_order_to_domain, map_orders_page};
use crate::models::filters::Paginated;
use crate::models::order::{BulkUpdateOrdersRequest, BulkUpdateResult, GetOrdersFilters, Order, OrderStatus};
use crate::utils::errors::AppResult;
use crate::utils::query::{QueryParams, ToQueryParams};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Los filtros llegan ya completos (página y tamaño)
    async fn list(&self, filters: &GetOrdersFilters) -> AppResult<Paginated<Order>>;
    async fn get(&self, id: &str) -> AppResult<Order>;
    async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order>;
    async fn bulk_update(&self, request: &BulkUpdateOrdersRequest) -> AppResult<BulkUpdateResult>;
}

pub struct HttpOrderRepository {
    client: BackendClient,
}

impl HttpOrderRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn list(&self, filters: &GetOrdersFilters) -> AppResult<Paginated<Order>> {
        let page: BackendPage<BackendOrder> = self
            .client
            .get_json("orders", &filters.to_query_params())
            .await?;
        Ok(map_orders_page(page))
    }

    async fn get(&self, id: &str) -> AppResult<Order> {
        let path = format!("orders/{}", path_segment(id));
        let order: BackendOrder = self
            .client
            .get_json(&path, &QueryParams::new())
            .await
            .map_err(|e| e.for_resource("Pedido", id))?;
        Ok(map_order_to_domain(order))
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let path = format!("orders/{}", path_segment(id));
        let body = BackendUpdateOrderStatusRequest { status };
        let order: BackendOrder = self
            .client
            .patch_json(&path, &body)
            .await
            .map_err(|e| e.for_resource("Pedido", id))?;
        Ok(map_order_to_domain(order))
    }

    async fn bulk_update(&self, request: &BulkUpdateOrdersRequest) -> AppResult<BulkUpdateResult> {
        let body = BackendBulkUpdateRequest {
            order_ids: request.order_ids.clone(),
            status: request.status,
        };
        let response: BackendBulkUpdateResponse = self.client.patch_json("orders/bulk-update", &body).await?;
        Ok(map_bulk_update_result(response))
    }
}
