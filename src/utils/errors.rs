//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del gateway
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Mensaje genérico para errores 500 del backend
pub const SERVER_ERROR_MESSAGE: &str = "Error interno del servidor. Intente nuevamente más tarde.";

/// Mensaje por defecto para conflictos al generar rutas
pub const ROUTE_CONFLICT_MESSAGE: &str =
    "Ya existen rutas generadas para estos pedidos. Use force_regenerate para regenerarlas.";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Error de validación local, nunca llega al backend
    #[error("{0}")]
    Validation(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    ServerError(String),

    /// Error del backend sin traducción conocida, se pasa tal cual
    #[error("Backend error {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl AppError {
    /// Código estable para que la UI decida cómo mostrar el error
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::ServerError(_) => "SERVER_ERROR",
            AppError::Backend { .. } => "BACKEND_ERROR",
            AppError::Transport(_) => "TRANSPORT_ERROR",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ServerError(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Backend { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Transport(_) | AppError::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Nombrar el recurso en un 404 genérico del backend
    pub fn for_resource(self, resource: &str, id: &str) -> AppError {
        match self {
            AppError::NotFound(_) => not_found_error(resource, id),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error, details) = match &self {
            AppError::Validation(_) => ("Validation Error", None),
            AppError::InvalidRequest(e) => ("Invalid Request", Some(json!(e))),
            AppError::NotFound(_) => ("Not Found", None),
            AppError::Conflict(_) => ("Conflict", None),
            AppError::ServerError(_) => ("Server Error", None),
            AppError::Backend { status, body } => (
                "Backend Error",
                Some(json!({ "backend_status": status, "backend_body": body })),
            ),
            AppError::Transport(e) => (
                "Transport Error",
                Some(json!({ "transport_error": e.to_string() })),
            ),
            AppError::Decode(msg) => ("Decode Error", Some(json!({ "decode_error": msg }))),
            AppError::Config(msg) => ("Configuration Error", Some(json!({ "config_error": msg }))),
        };

        if status.is_server_error() {
            log::error!("❌ {}: {}", error, self);
        } else {
            log::warn!("⚠️ {}: {}", error, self);
        }

        let body = ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
            details,
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Query string mal formado: mismo formato JSON que el resto de errores
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} con id '{}' no encontrado", resource, id))
}

/// Extraer el mensaje de un cuerpo de error del backend (`message`, `detail` o `error`)
pub fn backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .filter(|msg| !msg.trim().is_empty())
        .map(|msg| msg.to_string())
}
