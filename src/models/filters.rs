//! Filtros paginados y valores por defecto
//!
//! Los valores por defecto (página 1, 20 por página) se aplican en un único
//! lugar: `build_effective_filter`. Los builders de query nunca rellenan nada.

use serde::Serialize;

/// Valores por defecto de paginación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDefaults {
    pub page: u32,
    pub per_page: u32,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

/// Filtro con página y tamaño de página opcionales
pub trait PaginatedFilter: Clone {
    fn page(&self) -> Option<u32>;
    fn per_page(&self) -> Option<u32>;
    fn set_pagination(&mut self, page: u32, per_page: u32);
}

/// Completar un filtro parcial con los valores por defecto
///
/// Solo toca `page` y `per_page`; el resto del filtro queda igual.
/// Un valor 0 se trata como ausente.
pub fn build_effective_filter<F: PaginatedFilter>(partial: &F, defaults: &FilterDefaults) -> F {
    let page = partial.page().filter(|p| *p > 0).unwrap_or(defaults.page);
    let per_page = partial
        .per_page()
        .filter(|p| *p > 0)
        .unwrap_or(defaults.per_page);

    let mut effective = partial.clone();
    effective.set_pagination(page, per_page);
    effective
}

/// Página de resultados ya mapeados al dominio
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}
