//! Búsqueda y agregados en cliente
//!
//! Se usan cuando los datos ya están en memoria y no hace falta otro
//! round-trip al backend.

pub mod inventory_view;
pub mod order_filter;
pub mod route_filter;
