//! Configuración de variables de entorno
//!
//! Todas las variables tienen valor por defecto para desarrollo local.
//! Un valor presente pero inválido es un error de configuración.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::models::filters::FilterDefaults;
use crate::utils::errors::{AppError, AppResult};

/// Configuración del entorno
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    // URLs base de los microservicios
    pub catalog_api_url: String,
    pub logistics_api_url: String,
    pub sales_api_url: String,
    pub http_timeout_secs: u64,
    pub default_per_page: u32,
    pub search_debounce_ms: u64,
    /// Usuario que figura como creador de rutas generadas
    pub routes_created_by: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: vec!["*".to_string()],
            catalog_api_url: "http://localhost:8001".to_string(),
            logistics_api_url: "http://localhost:8002".to_string(),
            sales_api_url: "http://localhost:8003".to_string(),
            http_timeout_secs: 30,
            default_per_page: 20,
            search_debounce_ms: 300,
            routes_created_by: "admin".to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración desde cualquier fuente clave → valor
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let config = Self {
            environment: text("ENVIRONMENT", defaults.environment),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            host: text("HOST", defaults.host),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            catalog_api_url: text("CATALOG_API_URL", defaults.catalog_api_url),
            logistics_api_url: text("LOGISTICS_API_URL", defaults.logistics_api_url),
            sales_api_url: text("SALES_API_URL", defaults.sales_api_url),
            http_timeout_secs: parse_var(&lookup, "HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            default_per_page: parse_var(&lookup, "DEFAULT_PER_PAGE", defaults.default_per_page)?,
            search_debounce_ms: parse_var(&lookup, "SEARCH_DEBOUNCE_MS", defaults.search_debounce_ms)?,
            routes_created_by: text("ROUTES_CREATED_BY", defaults.routes_created_by),
        };

        if config.default_per_page == 0 {
            return Err(AppError::Config("DEFAULT_PER_PAGE debe ser mayor que 0".to_string()));
        }

        Ok(config)
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn filter_defaults(&self) -> FilterDefaults {
        FilterDefaults {
            page: 1,
            per_page: self.default_per_page,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("{} inválido ('{}'): {}", key, raw, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppResult<EnvironmentConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, EnvironmentConfig::default());
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.filter_defaults(), FilterDefaults::default());
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("SALES_API_URL", "http://sales:9000"),
            ("DEFAULT_PER_PAGE", "50"),
            ("ENVIRONMENT", "production"),
        ])
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:8080");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.sales_api_url, "http://sales:9000");
        assert_eq!(config.filter_defaults().per_page, 50);
        assert!(config.is_production());
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let err = config_from(&[("HTTP_TIMEOUT_SECS", "treinta")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = config_from(&[("DEFAULT_PER_PAGE", "0")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
