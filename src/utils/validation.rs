//! Utilidades de validación
//!
//! Validaciones locales que se ejecutan antes de cualquier llamada al backend.

use crate::utils::errors::{validation_error, AppResult};

/// Longitud mínima del término de búsqueda (regla de negocio)
pub const MIN_SEARCH_LENGTH: usize = 3;

pub const SEARCH_TERM_REQUIRED: &str = "El término de búsqueda es requerido";
pub const SEARCH_TERM_TOO_SHORT: &str = "El término de búsqueda debe tener al menos 3 caracteres";
pub const SEARCH_CRITERIA_REQUIRED: &str = "Debe proporcionar al menos un criterio de búsqueda";

/// Validar un término de búsqueda y devolverlo recortado
pub fn validate_search_term(raw: &str) -> AppResult<String> {
    let term = raw.trim();
    if term.is_empty() {
        return Err(validation_error(SEARCH_TERM_REQUIRED));
    }
    if term.chars().count() < MIN_SEARCH_LENGTH {
        return Err(validation_error(SEARCH_TERM_TOO_SHORT));
    }
    Ok(term.to_string())
}

/// Normalizar un valor opcional: `None` si está vacío tras recortar
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
