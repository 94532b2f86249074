//! Cliente HTTP hacia los microservicios
//!
//! Un `BackendClient` por URL base (catálogo, logística, ventas). Traduce
//! los códigos de estado del backend a `AppError` y decodifica el cuerpo
//! JSON; no conoce ningún recurso en particular.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::utils::errors::{AppError, AppResult, SERVER_ERROR_MESSAGE};
use crate::utils::query::QueryParams;

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    name: String,
}

impl BackendClient {
    /// Crear cliente con timeout propio
    pub fn new(name: &str, base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("No se pudo crear el cliente HTTP: {}", e)))?;

        Ok(Self::with_client(name, base_url, client))
    }

    /// Reusar un `reqwest::Client` existente (comparte el pool de conexiones)
    pub fn with_client(name: &str, base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            name: name.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> AppResult<T> {
        let body = self.get_text(path, query).await?;
        decode(&body)
    }

    /// GET sin tipar, para respuestas cuya forma varía
    pub async fn get_value(&self, path: &str, query: &QueryParams) -> AppResult<Value> {
        let body = self.get_text(path, query).await?;
        decode(&body)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::info!("📤 [{}] POST {}", self.name, url);
        let body = self.send(self.client.post(&url).json(body)).await?;
        decode(&body)
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::info!("📤 [{}] PATCH {}", self.name, url);
        let body = self.send(self.client.patch(&url).json(body)).await?;
        decode(&body)
    }

    async fn get_text(&self, path: &str, query: &QueryParams) -> AppResult<String> {
        let url = self.url(path);
        log::info!("📥 [{}] GET {} ({} params)", self.name, url, query.len());
        self.send(self.client.get(&url).query(query.as_pairs())).await
    }

    async fn send(&self, request: RequestBuilder) -> AppResult<String> {
        let response = request.send().await.map_err(|e| {
            log::error!("❌ [{}] Error de red: {}", self.name, e);
            AppError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        log::warn!("⚠️ [{}] Backend respondió {}", self.name, status);
        Err(translate_status(status, body))
    }
}

/// Traducir un estado no exitoso del backend
///
/// El 409 se deja como `Backend`; solo la generación de rutas le da
/// significado propio.
pub fn translate_status(status: StatusCode, body: String) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::NotFound("Recurso no encontrado".to_string()),
        StatusCode::INTERNAL_SERVER_ERROR => AppError::ServerError(SERVER_ERROR_MESSAGE.to_string()),
        other => AppError::Backend {
            status: other.as_u16(),
            body,
        },
    }
}

/// Codificar un id para usarlo como segmento de ruta
pub fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

fn decode<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    // Algunos endpoints responden 204 o cuerpo vacío
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = BackendClient::with_client("ventas", "http://sales:8000/", Client::new());
        assert_eq!(client.base_url(), "http://sales:8000");
        assert_eq!(client.url("/orders"), "http://sales:8000/orders");
        assert_eq!(client.url("orders/1"), "http://sales:8000/orders/1");
    }

    #[test]
    fn test_translate_status() {
        assert!(matches!(
            translate_status(StatusCode::NOT_FOUND, String::new()),
            AppError::NotFound(_)
        ));

        let err = translate_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);

        match translate_status(StatusCode::CONFLICT, "{}".to_string()) {
            AppError::Backend { status, body } => {
                assert_eq!(status, 409);
                assert_eq!(body, "{}");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_path_segment_encodes() {
        assert_eq!(path_segment("PED 1/2"), "PED%201%2F2");
        assert_eq!(path_segment("abc-123"), "abc-123");
    }

    #[test]
    fn test_decode_empty_body_as_null() {
        let value: Value = decode("").unwrap();
        assert!(value.is_null());
        assert!(matches!(decode::<Vec<u32>>("{"), Err(AppError::Decode(_))));
    }
}
