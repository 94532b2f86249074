//! Casos de uso de logística: vehículos disponibles y rutas

use std::sync::Arc;

use validator::Validate;

use crate::mappers::route_mapper::map_generate_routes_request;
use crate::mappers::vehicle_mapper::map_vehicle_list;
use crate::models::route::{DeliveryRoute, GenerateRoutesRequest, GenerateRoutesResult, RouteListFilters};
use crate::models::vehicle::{AvailableVehiclesQuery, Vehicle};
use crate::repositories::{RouteRepository, VehicleRepository};
use crate::search::route_filter::route_matches;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct RouteService {
    vehicles: Arc<dyn VehicleRepository>,
    routes: Arc<dyn RouteRepository>,
    created_by: String,
}

impl RouteService {
    /// `created_by` identifica al operador que genera rutas (sin autenticación)
    pub fn new(
        vehicles: Arc<dyn VehicleRepository>,
        routes: Arc<dyn RouteRepository>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            vehicles,
            routes,
            created_by: created_by.into(),
        }
    }

    pub async fn available_vehicles(&self, query: &AvailableVehiclesQuery) -> AppResult<Vec<Vehicle>> {
        let raw = self.vehicles.available(query).await?;
        let vehicles = map_vehicle_list(&raw);
        log::info!("🚚 {} vehículos disponibles", vehicles.len());
        Ok(vehicles)
    }

    pub async fn generate_routes(&self, request: GenerateRoutesRequest) -> AppResult<GenerateRoutesResult> {
        request.validate()?;
        log::info!(
            "🚀 Generando rutas para {} pedidos (CEDIS {}, {})",
            request.order_ids.len(),
            request.distribution_center_id,
            request.planned_date
        );

        let body = map_generate_routes_request(request, &self.created_by);
        let result = self.routes.generate(&body).await?;

        log::info!(
            "✅ Generación {:?}: {} rutas, {} pedidos sin asignar",
            result.status,
            result.summary.total_routes,
            result.summary.unassigned_orders
        );
        Ok(result)
    }

    /// Listar rutas; `q` se aplica en memoria sobre la lista recibida
    pub async fn list_routes(&self, filters: &RouteListFilters) -> AppResult<Vec<DeliveryRoute>> {
        let routes = self.routes.list(filters).await?;
        let q = filters.q.as_deref().unwrap_or_default();
        Ok(routes.into_iter().filter(|r| route_matches(r, q)).collect())
    }
}
