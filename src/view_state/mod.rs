//! Estado de vistas independiente de cualquier framework de UI
//!
//! Contenedores explícitos para carga, paginación, listados y debounce,
//! testeables sin renderizar nada.

pub mod debounce;
pub mod list_view;
pub mod load_state;
pub mod pagination;
