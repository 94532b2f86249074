//! Services module
//!
//! Casos de uso: valores por defecto de filtros, validación previa a
//! cualquier llamada, decodificación de envelopes y agregados.

pub mod inventory_service;
pub mod order_service;
pub mod product_service;
pub mod route_service;

pub use inventory_service::InventoryService;
pub use order_service::OrderService;
pub use product_service::ProductService;
pub use route_service::RouteService;
