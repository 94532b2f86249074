//! Estado de paginación
//!
//! `total_pages` nunca baja de 1: con cero registros el paginador sigue
//! mostrando una página vacía.

use serde::Serialize;

/// Número de páginas para `total` registros, mínimo 1
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    current_page: u32,
    per_page: u32,
    total: u64,
    total_pages: u32,
}

impl PaginationState {
    pub fn new(per_page: u32) -> Self {
        let per_page = per_page.max(1);
        Self {
            current_page: 1,
            per_page,
            total: 0,
            total_pages: 1,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Registrar el total devuelto por el backend
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.recompute();
    }

    /// Cambiar el tamaño de página; 0 se ignora
    pub fn set_per_page(&mut self, per_page: u32) {
        if per_page == 0 {
            log::warn!("⚠️ Tamaño de página 0 ignorado, se mantiene {}", self.per_page);
            return;
        }
        self.per_page = per_page;
        self.recompute();
    }

    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    fn recompute(&mut self) {
        self.total_pages = total_pages(self.total, self.per_page);
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_formula() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
    }

    #[test]
    fn test_total_pages_matches_ceil_for_many_inputs() {
        for per_page in 1..=25u32 {
            for total in 0..=200u64 {
                let expected = ((total as f64) / (per_page as f64)).ceil().max(1.0) as u32;
                assert_eq!(total_pages(total, per_page), expected, "total={total} per_page={per_page}");
            }
        }
    }

    #[test]
    fn test_recomputes_on_total_and_per_page() {
        let mut state = PaginationState::new(20);
        assert_eq!(state.total_pages(), 1);

        state.set_total(45);
        assert_eq!(state.total_pages(), 3);

        state.set_per_page(50);
        assert_eq!(state.total_pages(), 1);

        state.set_per_page(0);
        assert_eq!(state.per_page(), 50);

        state.set_total(0);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_page_never_below_one() {
        let mut state = PaginationState::default();
        state.set_page(0);
        assert_eq!(state.current_page(), 1);
        state.set_page(4);
        state.reset_page();
        assert_eq!(state.current_page(), 1);
    }
}
