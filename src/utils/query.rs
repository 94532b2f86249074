//! Construcción de query params para los backends
//!
//! Los filtros son objetos dispersos: solo los campos con valor definido
//! y no vacío llegan a la URL. Este módulo no aplica valores por defecto,
//! eso lo hace la capa de servicios con `build_effective_filter`.

use std::fmt::Display;

/// Conjunto ordenado de pares clave/valor para la query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar un parámetro si tiene valor; los vacíos se omiten
    pub fn push<T: Display>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                self.pairs.push((key.to_string(), trimmed.to_string()));
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Filtros que saben convertirse a query params del backend
pub trait ToQueryParams {
    fn to_query_params(&self) -> QueryParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_omits_none_and_empty() {
        let params = QueryParams::new()
            .push("status", Some("pending"))
            .push::<&str>("seller_id", None)
            .push("customer_id", Some(""))
            .push("city", Some("   "))
            .push("page", Some(2u32))
            .push("include_details", Some(true));

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("status"), Some("pending"));
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("include_details"), Some("true"));
        assert!(!params.contains_key("customer_id"));
        assert!(!params.contains_key("city"));
    }

    #[test]
    fn test_push_trims_values() {
        let params = QueryParams::new().push("search", Some("  GLV  "));
        assert_eq!(params.get("search"), Some("GLV"));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let params = QueryParams::new().push("b", Some(1)).push("a", Some(2));
        let keys: Vec<&str> = params.as_pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
