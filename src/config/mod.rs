//! Configuración del proyecto
//!
//! Variables de entorno y valores por defecto del gateway.

pub mod environment;

pub use environment::*;
