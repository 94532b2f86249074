//! DTOs comunes a los tres backends

use serde::{Deserialize, Serialize};

/// Página genérica tal como la devuelven los backends
///
/// El arreglo viene bajo `items`, `orders`, `products` o `data` según el servicio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendPage<T> {
    #[serde(alias = "orders", alias = "products", alias = "data")]
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Envoltorio de respuesta para operaciones de escritura
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}
