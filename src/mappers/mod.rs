//! Mappers backend ↔ dominio
//!
//! Funciones puras y totales: sin red ni efectos, deterministas, y sin
//! fallar para payloads bien formados. Los payloads mal formados son
//! responsabilidad de la capa de fetch.

pub mod inventory_mapper;
pub mod order_mapper;
pub mod product_mapper;
pub mod route_mapper;
pub mod vehicle_mapper;
