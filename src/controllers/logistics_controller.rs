use crate::dto::common_dto::ApiResponse;
use crate::models::route::{DeliveryRoute, GenerateRoutesRequest, GenerateRoutesResult, GenerationStatus, RouteListFilters};
use crate::models::vehicle::{AvailableVehiclesQuery, Vehicle};
use crate::services::RouteService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct LogisticsController {
    service: RouteService,
}

impl LogisticsController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: state.routes.clone(),
        }
    }

    pub async fn available_vehicles(&self, query: AvailableVehiclesQuery) -> Result<Vec<Vehicle>, AppError> {
        self.service.available_vehicles(&query).await
    }

    pub async fn generate_routes(
        &self,
        request: GenerateRoutesRequest,
    ) -> Result<ApiResponse<GenerateRoutesResult>, AppError> {
        let result = self.service.generate_routes(request).await?;
        let message = match result.status {
            GenerationStatus::Success => "Rutas generadas exitosamente",
            GenerationStatus::Partial => "Rutas generadas parcialmente, revise los pedidos sin asignar",
            GenerationStatus::Failed => "No se pudieron generar las rutas",
        };
        Ok(ApiResponse {
            success: result.status != GenerationStatus::Failed,
            message: Some(message.to_string()),
            data: Some(result),
        })
    }

    pub async fn list_routes(&self, filters: RouteListFilters) -> Result<Vec<DeliveryRoute>, AppError> {
        self.service.list_routes(&filters).await
    }
}
