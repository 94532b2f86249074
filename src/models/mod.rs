//! Modelos del dominio
//!
//! Entidades camelCase que consume la UI, y los filtros/requests que
//! la UI envía. Se reconstruyen en cada fetch; no hay persistencia local.

pub mod filters;
pub mod inventory;
pub mod order;
pub mod product;
pub mod route;
pub mod vehicle;
