//! DTOs de inventario del servicio de logística

use serde::{Deserialize, Serialize};

/// Respuesta de GET /inventory/product-location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendProductLocationResponse {
    #[serde(default)]
    pub product_sku: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(alias = "items")]
    pub locations: Vec<BackendProductLocationItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendProductLocationItem {
    pub batch: BackendBatch,
    pub location: BackendPhysicalLocation,
    pub distribution_center: BackendDistributionCenter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendBatch {
    pub id: String,
    pub batch_number: String,
    pub expiry_date: String,
    #[serde(default)]
    pub manufacture_date: Option<String>,
    pub quantity: i64,
    pub reserved_quantity: i64,
    pub available_quantity: i64,
    #[serde(default)]
    pub is_expired: bool,
    #[serde(default)]
    pub is_near_expiry: bool,
    #[serde(default)]
    pub is_quarantined: bool,
    #[serde(default)]
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendPhysicalLocation {
    pub aisle: String,
    pub shelf: String,
    pub level: String,
    #[serde(default)]
    pub position: Option<String>,
    pub zone_type: String,
    #[serde(default)]
    pub temperature_range: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendDistributionCenter {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
}

/// Respuesta de GET /inventory/stock-levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendStockLevelsResponse {
    #[serde(alias = "items", alias = "data")]
    pub stock_levels: Vec<BackendStockLevel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendStockLevel {
    pub product_sku: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub distribution_center: BackendDistributionCenter,
    pub total_quantity: i64,
    pub reserved_quantity: i64,
    pub available_quantity: i64,
    pub batch_count: u32,
    #[serde(default)]
    pub nearest_expiry: Option<String>,
}
