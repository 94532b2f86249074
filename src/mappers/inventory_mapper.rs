//! Conversión de inventario backend → dominio

use crate::dto::inventory_dto::{
    BackendBatch, BackendDistributionCenter, BackendPhysicalLocation, BackendProductLocationItem,
    BackendProductLocationResponse, BackendStockLevel,
};
use crate::models::inventory::{
    Batch, DistributionCenter, PhysicalLocation, ProductLocationItem, ProductLocationResult,
    StockLevel,
};
use crate::search::inventory_view::summarize;

pub fn map_product_location_response(backend: BackendProductLocationResponse) -> ProductLocationResult {
    let items: Vec<ProductLocationItem> = backend
        .locations
        .into_iter()
        .map(map_product_location_item)
        .collect();

    ProductLocationResult {
        product_sku: backend.product_sku,
        product_name: backend.product_name,
        summary: summarize(&items),
        items,
    }
}

pub fn map_product_location_item(backend: BackendProductLocationItem) -> ProductLocationItem {
    ProductLocationItem {
        batch: map_batch(backend.batch),
        location: map_physical_location(backend.location),
        distribution_center: map_distribution_center(backend.distribution_center),
    }
}

fn map_batch(backend: BackendBatch) -> Batch {
    Batch {
        id: backend.id,
        batch_number: backend.batch_number,
        expiry_date: backend.expiry_date,
        manufacture_date: backend.manufacture_date,
        quantity: backend.quantity,
        reserved_quantity: backend.reserved_quantity,
        available_quantity: backend.available_quantity,
        is_expired: backend.is_expired,
        is_near_expiry: backend.is_near_expiry,
        is_quarantined: backend.is_quarantined,
        is_available: backend.is_available,
    }
}

fn map_physical_location(backend: BackendPhysicalLocation) -> PhysicalLocation {
    PhysicalLocation {
        aisle: backend.aisle,
        shelf: backend.shelf,
        level: backend.level,
        position: backend.position,
        zone_type: backend.zone_type,
        temperature_range: backend.temperature_range,
    }
}

pub fn map_distribution_center(backend: BackendDistributionCenter) -> DistributionCenter {
    DistributionCenter {
        id: backend.id,
        code: backend.code,
        name: backend.name,
        city: backend.city,
    }
}

pub fn map_stock_level(backend: BackendStockLevel) -> StockLevel {
    StockLevel {
        product_sku: backend.product_sku,
        product_name: backend.product_name,
        distribution_center: map_distribution_center(backend.distribution_center),
        total_quantity: backend.total_quantity,
        reserved_quantity: backend.reserved_quantity,
        available_quantity: backend.available_quantity,
        batch_count: backend.batch_count,
        nearest_expiry: backend.nearest_expiry,
    }
}
