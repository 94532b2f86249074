//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los servicios guardan sus repositorios
//! detrás de `Arc<dyn ...>`, así que clonar el estado es barato.

use std::sync::Arc;

use reqwest::Client;

use crate::clients::BackendClient;
use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    HttpInventoryRepository, HttpOrderRepository, HttpProductRepository, HttpRouteRepository,
    HttpVehicleRepository, InventoryRepository, OrderRepository, ProductRepository, RouteRepository,
    VehicleRepository,
};
use crate::services::{InventoryService, OrderService, ProductService, RouteService};
use crate::utils::errors::{AppError, AppResult};

/// Repositorios que respaldan los servicios
#[derive(Clone)]
pub struct Repositories {
    pub orders: Arc<dyn OrderRepository>,
    pub vehicles: Arc<dyn VehicleRepository>,
    pub routes: Arc<dyn RouteRepository>,
    pub inventory: Arc<dyn InventoryRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl Repositories {
    /// Repositorios HTTP contra las URLs configuradas
    pub fn http(config: &EnvironmentConfig) -> AppResult<Self> {
        // Un solo pool de conexiones para los tres backends
        let http_client = Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| AppError::Config(format!("No se pudo crear el cliente HTTP: {}", e)))?;

        let sales = BackendClient::with_client("ventas", &config.sales_api_url, http_client.clone());
        let logistics =
            BackendClient::with_client("logística", &config.logistics_api_url, http_client.clone());
        let catalog = BackendClient::with_client("catálogo", &config.catalog_api_url, http_client);

        Ok(Self {
            orders: Arc::new(HttpOrderRepository::new(sales)),
            vehicles: Arc::new(HttpVehicleRepository::new(logistics.clone())),
            routes: Arc::new(HttpRouteRepository::new(logistics.clone())),
            inventory: Arc::new(HttpInventoryRepository::new(logistics)),
            products: Arc::new(HttpProductRepository::new(catalog)),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub orders: OrderService,
    pub routes: RouteService,
    pub inventory: InventoryService,
    pub products: ProductService,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, repositories: Repositories) -> Self {
        let defaults = config.filter_defaults();
        Self {
            orders: OrderService::new(repositories.orders, defaults),
            routes: RouteService::new(
                repositories.vehicles,
                repositories.routes,
                config.routes_created_by.clone(),
            ),
            inventory: InventoryService::new(repositories.inventory, config.search_debounce()),
            products: ProductService::new(repositories.products, defaults),
            config,
        }
    }

    /// Estado de producción: repositorios HTTP
    pub fn from_config(config: EnvironmentConfig) -> AppResult<Self> {
        let repositories = Repositories::http(&config)?;
        log::info!(
            "🔗 Backends: ventas={}, logística={}, catálogo={}",
            config.sales_api_url,
            config.logistics_api_url,
            config.catalog_api_url
        );
        Ok(Self::new(config, repositories))
    }
}
