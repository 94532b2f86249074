//! Modelo de pedidos (dominio)
//!
//! Entidades camelCase que se sirven a la UI, más los filtros y requests
//! del listado y la confirmación de pedidos.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::filters::PaginatedFilter;
use crate::utils::query::{QueryParams, ToQueryParams};

/// Estado del pedido
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::InTransit => "in_transit",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pedido
///
/// `total_amount = subtotal - discount_amount + tax_amount` lo garantiza el backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_id: String,
    pub seller_id: String,
    pub status: OrderStatus,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub delivery_city: String,
    pub delivery_department: String,
    pub delivery_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_longitude: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
    pub customer: Customer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub business_name: String,
    pub document_type: String,
    pub document_number: String,
    pub customer_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_sku: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub discount_percentage: Decimal,
    pub tax_percentage: Decimal,
    pub distribution_center_code: String,
    pub stock_confirmed: bool,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Filtros del listado de pedidos
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrdersFilters {
    pub customer_id: Option<String>,
    pub seller_id: Option<String>,
    pub status: Option<OrderStatus>,
    pub order_date_from: Option<NaiveDate>,
    pub order_date_to: Option<NaiveDate>,
    pub delivery_date_from: Option<NaiveDate>,
    pub delivery_date_to: Option<NaiveDate>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub include_details: Option<bool>,
}

impl ToQueryParams for GetOrdersFilters {
    fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .push("customer_id", self.customer_id.as_ref())
            .push("seller_id", self.seller_id.as_ref())
            .push("status", self.status.as_ref())
            .push("order_date_from", self.order_date_from.as_ref())
            .push("order_date_to", self.order_date_to.as_ref())
            .push("delivery_date_from", self.delivery_date_from.as_ref())
            .push("delivery_date_to", self.delivery_date_to.as_ref())
            .push("page", self.page)
            .push("per_page", self.per_page)
            .push("include_details", self.include_details)
    }
}

impl PaginatedFilter for GetOrdersFilters {
    fn page(&self) -> Option<u32> {
        self.page
    }

    fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    fn set_pagination(&mut self, page: u32, per_page: u32) {
        self.page = Some(page);
        self.per_page = Some(per_page);
    }
}

/// Request para cambiar el estado de un pedido
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Request para cambiar el estado de varios pedidos
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateOrdersRequest {
    #[validate(length(min = 1, message = "Debe seleccionar al menos un pedido"))]
    pub order_ids: Vec<String>,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateResult {
    pub success: bool,
    pub updated_count: u32,
}
