use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Producto del catálogo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendProduct {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub supplier_id: Option<String>,
    pub unit_price: Decimal,
    #[serde(default)]
    pub requires_cold_chain: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
