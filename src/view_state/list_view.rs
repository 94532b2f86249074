//! Estado de una vista de listado: filtros + paginación + selección
//!
//! Cada operación devuelve el filtro efectivo con el que hay que hacer
//! exactamente un fetch.

use std::collections::BTreeSet;

use crate::models::filters::{Paginated, PaginatedFilter};
use crate::view_state::pagination::PaginationState;

#[derive(Debug, Clone)]
pub struct ListViewState<F: PaginatedFilter> {
    filters: F,
    pagination: PaginationState,
    selection: BTreeSet<String>,
}

impl<F: PaginatedFilter> ListViewState<F> {
    pub fn new(filters: F, per_page: u32) -> Self {
        Self {
            filters,
            pagination: PaginationState::new(per_page),
            selection: BTreeSet::new(),
        }
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Filtro listo para enviar: filtros actuales + página/tamaño actuales
    pub fn effective_filter(&self) -> F {
        let mut effective = self.filters.clone();
        effective.set_pagination(self.pagination.current_page(), self.pagination.per_page());
        effective
    }

    /// Cambio de filtros: vuelve a la página 1
    pub fn update_filters(&mut self, filters: F) -> F {
        self.filters = filters;
        self.pagination.reset_page();
        self.selection.clear();
        self.effective_filter()
    }

    /// Cambio de página o tamaño: limpia la selección, no toca los filtros
    pub fn change_page(&mut self, page: u32, per_page: Option<u32>) -> F {
        self.selection.clear();
        if let Some(per_page) = per_page {
            self.pagination.set_per_page(per_page);
        }
        self.pagination.set_page(page);
        self.effective_filter()
    }

    /// Registrar la página recibida del backend
    pub fn apply_page<T>(&mut self, page: &Paginated<T>) {
        self.pagination.set_total(page.total);
    }

    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    pub fn select_all<'a, I: IntoIterator<Item = &'a str>>(&mut self, ids: I) {
        self.selection.extend(ids.into_iter().map(str::to_string));
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.iter().cloned().collect()
    }
}
