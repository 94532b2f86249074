//! Casos de uso de inventario
//!
//! Toda validación ocurre antes de llamar al repositorio: un término
//! inválido nunca genera tráfico hacia logística.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::models::inventory::{
    ProductLocationQueryParams, ProductLocationResult, StockLevel, StockLevelsQuery,
};
use crate::repositories::InventoryRepository;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{non_empty, validate_search_term, SEARCH_CRITERIA_REQUIRED};
use crate::view_state::debounce::{debounce_channel, DebounceSender, Debounced};

#[derive(Clone)]
pub struct InventoryService {
    repository: Arc<dyn InventoryRepository>,
    search_debounce: Duration,
}

impl InventoryService {
    pub fn new(repository: Arc<dyn InventoryRepository>, search_debounce: Duration) -> Self {
        Self {
            repository,
            search_debounce,
        }
    }

    /// Canal de entrada para la búsqueda mientras se escribe
    pub fn search_input(&self) -> (DebounceSender<String>, Debounced<String>) {
        debounce_channel(self.search_debounce)
    }

    /// Buscar cada término estable y publicar su resultado
    ///
    /// Termina cuando se cierra la entrada o nadie escucha los resultados.
    pub async fn search_as_you_type(
        &self,
        mut terms: Debounced<String>,
        results: mpsc::UnboundedSender<AppResult<ProductLocationResult>>,
    ) {
        while let Some(term) = terms.next().await {
            let result = self.search_product_location(&term).await;
            if results.send(result).is_err() {
                log::debug!("🔌 Búsqueda cerrada por el receptor");
                break;
            }
        }
    }

    /// Buscar la ubicación de un producto por texto libre
    pub async fn search_product_location(&self, raw_term: &str) -> AppResult<ProductLocationResult> {
        let term = validate_search_term(raw_term)?;
        let params = ProductLocationQueryParams {
            search: Some(term),
            ..Default::default()
        };
        self.fetch_product_location(params).await
    }

    /// Ubicación de producto con parámetros completos
    pub async fn product_location(&self, params: ProductLocationQueryParams) -> AppResult<ProductLocationResult> {
        if !params.has_criteria() {
            return Err(validation_error(SEARCH_CRITERIA_REQUIRED));
        }

        let mut params = params;
        params.search = match non_empty(params.search.as_deref()) {
            Some(search) => Some(validate_search_term(search)?),
            None => None,
        };
        self.fetch_product_location(params).await
    }

    pub async fn stock_levels(&self, query: &StockLevelsQuery) -> AppResult<Vec<StockLevel>> {
        self.repository.stock_levels(query).await
    }

    async fn fetch_product_location(&self, params: ProductLocationQueryParams) -> AppResult<ProductLocationResult> {
        log::info!("🔍 Buscando ubicación de producto: {:?}", params.search.as_deref().or(params.sku.as_deref()));
        let result = self.repository.product_location(&params).await?;
        log::info!(
            "📦 {} ubicaciones, {} unidades disponibles",
            result.summary.distinct_locations,
            result.summary.total_available
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inventory::ProductLocationSummary;
    use crate::utils::validation::{SEARCH_TERM_REQUIRED, SEARCH_TERM_TOO_SHORT};
    use async_trait::async_trait;
    use std::sync::Mutex;

    const DEBOUNCE: Duration = Duration::from_millis(300);

    #[derive(Default)]
    struct RecordingRepository {
        calls: Mutex<Vec<ProductLocationQueryParams>>,
    }

    #[async_trait]
    impl InventoryRepository for RecordingRepository {
        async fn product_location(&self, params: &ProductLocationQueryParams) -> AppResult<ProductLocationResult> {
            self.calls.lock().unwrap().push(params.clone());
            Ok(ProductLocationResult {
                product_sku: params.search.clone(),
                product_name: None,
                items: vec![],
                summary: ProductLocationSummary::default(),
            })
        }

        async fn stock_levels(&self, _query: &StockLevelsQuery) -> AppResult<Vec<StockLevel>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_invalid_terms_never_reach_repository() {
        let repository = Arc::new(RecordingRepository::default());
        let service = InventoryService::new(repository.clone(), DEBOUNCE);

        let cases = [
            ("ab", SEARCH_TERM_TOO_SHORT),
            ("", SEARCH_TERM_REQUIRED),
            ("   ", SEARCH_TERM_REQUIRED),
        ];
        for (term, expected) in cases {
            let err = service.search_product_location(term).await.unwrap_err();
            assert_eq!(err.to_string(), expected, "term: {term:?}");
        }

        assert!(repository.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_valid_term_is_trimmed() {
        let repository = Arc::new(RecordingRepository::default());
        let service = InventoryService::new(repository.clone(), DEBOUNCE);

        service.search_product_location("  GLV-LAT-M  ").await.unwrap();

        let calls = repository.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search.as_deref(), Some("GLV-LAT-M"));
    }

    #[tokio::test]
    async fn test_product_location_requires_criteria() {
        let repository = Arc::new(RecordingRepository::default());
        let service = InventoryService::new(repository.clone(), DEBOUNCE);

        let params = ProductLocationQueryParams {
            distribution_center_id: Some("1".to_string()),
            only_available: Some(true),
            ..Default::default()
        };
        let err = service.product_location(params).await.unwrap_err();
        assert_eq!(err.to_string(), SEARCH_CRITERIA_REQUIRED);
        assert!(repository.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_product_location_by_sku_skips_term_rules() {
        let repository = Arc::new(RecordingRepository::default());
        let service = InventoryService::new(repository.clone(), DEBOUNCE);

        let params = ProductLocationQueryParams {
            sku: Some("GL".to_string()),
            search: Some("  ".to_string()),
            ..Default::default()
        };
        service.product_location(params).await.unwrap();

        let calls = repository.calls.lock().unwrap();
        assert_eq!(calls[0].sku.as_deref(), Some("GL"));
        assert_eq!(calls[0].search, None);
    }

    async fn type_slowly(service: &InventoryService) -> Vec<AppResult<ProductLocationResult>> {
        let (input, terms) = service.search_input();
        let (results_tx, mut results_rx) = mpsc::unbounded_channel();

        let worker = service.clone();
        let search = tokio::spawn(async move { worker.search_as_you_type(terms, results_tx).await });

        for term in ["g", "gl", "glv-lat"] {
            input.send(term.to_string());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        drop(input);
        search.await.unwrap();

        let mut results = Vec::new();
        while let Some(result) = results_rx.recv().await {
            results.push(result);
        }
        results
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_as_you_type_uses_configured_quiet_period() {
        let repository = Arc::new(RecordingRepository::default());
        let service = InventoryService::new(repository.clone(), DEBOUNCE);

        let results = type_slowly(&service).await;

        assert_eq!(results.len(), 1);
        assert!(results[0].is_ok());
        let calls = repository.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].search.as_deref(), Some("glv-lat"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_quiet_period_searches_every_term() {
        let repository = Arc::new(RecordingRepository::default());
        let service = InventoryService::new(repository.clone(), Duration::from_millis(50));

        let results = type_slowly(&service).await;

        // "g" y "gl" fallan la validación sin llegar al repositorio
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap_err().to_string(), SEARCH_TERM_TOO_SHORT);
        assert_eq!(results[1].as_ref().unwrap_err().to_string(), SEARCH_TERM_TOO_SHORT);
        assert!(results[2].is_ok());
        assert_eq!(repository.calls.lock().unwrap().len(), 1);
    }
}
