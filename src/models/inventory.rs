//! Modelo de inventario (dominio)
//!
//! Ubicación física de productos por lote y centro de distribución,
//! y niveles de stock.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::query::{QueryParams, ToQueryParams};
use crate::utils::validation::non_empty;

/// Estrategia de selección de lotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingStrategy {
    /// First-expired-first-out
    Fefo,
    /// First-in-first-out
    Fifo,
    /// Last-in-first-out
    Lifo,
}

impl fmt::Display for OrderingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OrderingStrategy::Fefo => "fefo",
            OrderingStrategy::Fifo => "fifo",
            OrderingStrategy::Lifo => "lifo",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: String,
    pub batch_number: String,
    pub expiry_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_date: Option<String>,
    pub quantity: i64,
    pub reserved_quantity: i64,
    pub available_quantity: i64,
    pub is_expired: bool,
    pub is_near_expiry: bool,
    pub is_quarantined: bool,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLocation {
    pub aisle: String,
    pub shelf: String,
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub zone_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_range: Option<String>,
}

impl PhysicalLocation {
    pub fn is_refrigerated(&self) -> bool {
        self.zone_type.eq_ignore_ascii_case("refrigerated")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionCenter {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLocationItem {
    pub batch: Batch,
    pub location: PhysicalLocation,
    pub distribution_center: DistributionCenter,
}

/// Agregados calculados sobre los ítems cargados
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLocationSummary {
    pub total_quantity: i64,
    pub total_available: i64,
    pub distinct_locations: usize,
    pub distribution_centers: usize,
    pub refrigerated_locations: usize,
    pub expired_batches: usize,
    pub near_expiry_batches: usize,
    pub has_results: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLocationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub items: Vec<ProductLocationItem>,
    pub summary: ProductLocationSummary,
}

/// Parámetros de búsqueda de ubicación de producto
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLocationQueryParams {
    pub search: Option<String>,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    pub distribution_center_id: Option<String>,
    pub include_expired: Option<bool>,
    pub include_reserved: Option<bool>,
    pub only_available: Option<bool>,
    pub ordering_strategy: Option<OrderingStrategy>,
}

impl ProductLocationQueryParams {
    /// Hay al menos un criterio que identifica el producto
    pub fn has_criteria(&self) -> bool {
        non_empty(self.search.as_deref()).is_some()
            || non_empty(self.sku.as_deref()).is_some()
            || non_empty(self.barcode.as_deref()).is_some()
    }
}

impl ToQueryParams for ProductLocationQueryParams {
    fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .push("search", self.search.as_ref())
            .push("sku", self.sku.as_ref())
            .push("barcode", self.barcode.as_ref())
            .push("distribution_center_id", self.distribution_center_id.as_ref())
            .push("include_expired", self.include_expired)
            .push("include_reserved", self.include_reserved)
            .push("only_available", self.only_available)
            .push("ordering_strategy", self.ordering_strategy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub product_sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub distribution_center: DistributionCenter,
    pub total_quantity: i64,
    pub reserved_quantity: i64,
    pub available_quantity: i64,
    pub batch_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_expiry: Option<String>,
}

/// Filtros de niveles de stock
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevelsQuery {
    pub product_sku: Option<String>,
    pub distribution_center_id: Option<String>,
    pub only_available: Option<bool>,
}

impl ToQueryParams for StockLevelsQuery {
    fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .push("product_sku", self.product_sku.as_ref())
            .push("distribution_center_id", self.distribution_center_id.as_ref())
            .push("only_available", self.only_available)
    }
}
