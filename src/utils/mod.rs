//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y construcción de query params.

pub mod errors;
pub mod query;
pub mod validation;
