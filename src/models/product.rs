//! Modelo de producto del catálogo

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::filters::PaginatedFilter;
use crate::utils::query::{QueryParams, ToQueryParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    pub unit_price: Decimal,
    pub requires_cold_chain: bool,
    pub is_active: bool,
}

/// Filtros del catálogo de productos
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub supplier_id: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ToQueryParams for ProductFilters {
    fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .push("search", self.search.as_ref())
            .push("category", self.category.as_ref())
            .push("supplier_id", self.supplier_id.as_ref())
            .push("is_active", self.is_active)
            .push("page", self.page)
            .push("per_page", self.per_page)
    }
}

impl PaginatedFilter for ProductFilters {
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
