//! Estado explícito de carga `{data, loading, error}`
//!
//! Cada petición recibe un `RequestToken` creciente. Solo el resultado de la
//! petición más reciente se aplica; las respuestas tardías de peticiones
//! anteriores se descartan. Tras `dispose()` ya no se aplica nada.

use std::fmt::Display;

use serde::Serialize;

/// Identificador de una petición en curso
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Qué pasó con un resultado entregado a `finish`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    Applied,
    Stale,
    Disposed,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    #[serde(skip)]
    latest: u64,
    #[serde(skip)]
    disposed: bool,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            latest: 0,
            disposed: false,
        }
    }
}

impl<T> LoadState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inicio de una petición: marca loading y limpia el error anterior
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        !self.disposed && token.0 == self.latest
    }

    /// Fin de una petición: éxito reemplaza los datos, fallo guarda el mensaje
    pub fn finish<E: Display>(&mut self, token: RequestToken, result: Result<T, E>) -> FinishOutcome {
        if self.disposed {
            log::debug!("🧹 Resultado de petición {} ignorado: vista descartada", token.0);
            return FinishOutcome::Disposed;
        }
        if token.0 != self.latest {
            log::debug!(
                "⏭️ Resultado obsoleto ignorado (petición {}, vigente {})",
                token.0,
                self.latest
            );
            return FinishOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        FinishOutcome::Applied
    }

    /// Equivalente a destruir el componente: las respuestas pendientes se ignoran
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.loading = false;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
