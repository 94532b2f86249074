//! DTOs - formato de cable de los backends
//!
//! Estructuras snake_case tal como las envían y reciben los servicios de
//! catálogo, logística y ventas. La conversión al dominio vive en `mappers`.

pub mod common_dto;
pub mod inventory_dto;
pub mod order_dto;
pub mod product_dto;
pub mod route_dto;
pub mod vehicle_dto;
