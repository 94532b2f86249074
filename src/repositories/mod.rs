//! Repositorios: un trait por recurso del backend y su implementación HTTP
//!
//! Los repositorios no aplican valores por defecto ni validan; reciben
//! filtros ya completos desde los servicios.

pub mod inventory_repository;
pub mod order_repository;
pub mod product_repository;
pub mod route_repository;
pub mod vehicle_repository;

pub use inventory_repository::{HttpInventoryRepository, InventoryRepository};
pub use order_repository::{HttpOrderRepository, OrderRepository};
pub use product_repository::{HttpProductRepository, ProductRepository};
pub use route_repository::{HttpRouteRepository, RouteRepository};
pub use vehicle_repository::{HttpVehicleRepository, VehicleRepository};
