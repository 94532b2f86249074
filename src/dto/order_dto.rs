use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::order::OrderStatus;

// Pedido tal como lo entrega el servicio de ventas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendOrder {
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
    #[serde(default)]
    pub delivery_latitude: Option<f64>,
    #[serde(default)]
    pub delivery_longitude: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
    pub customer: BackendCustomer,
    #[serde(default)]
    pub items: Option<Vec<BackendOrderItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendCustomer {
    pub id: String,
    pub business_name: String,
    pub document_type: String,
    pub document_number: String,
    pub customer_type: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

// Los montos de cada línea los calcula el backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendOrderItem {
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

// Body de PATCH /orders/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendUpdateOrderStatusRequest {
    pub status: OrderStatus,
}

// Body de PATCH /orders/bulk-update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendBulkUpdateRequest {
    pub order_ids: Vec<String>,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendBulkUpdateResponse {
    pub success: bool,
    pub updated_count: u32,
}
