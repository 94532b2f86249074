//! Controladores: adaptan los servicios a las respuestas HTTP

pub mod inventory_controller;
pub mod logistics_controller;
pub mod order_controller;
pub mod product_controller;
