//! DTOs del servicio de logística para rutas
//!
//! Incluye la generación de rutas (caja negra remota) y el listado
//! de rutas planificadas.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::route::{GenerationStatus, OptimizationStrategy};

/// Body de POST /routes/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendGenerateRoutesRequest {
    pub distribution_center_id: String,
    pub planned_date: NaiveDate,
    pub order_ids: Vec<String>,
    pub optimization_strategy: OptimizationStrategy,
    pub force_regenerate: bool,
    pub created_by: String,
}

/// Envelope de respuesta de la generación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendGenerateRoutesResponse {
    pub status: GenerationStatus,
    pub summary: BackendRouteSummary,
    #[serde(default)]
    pub routes: Vec<BackendGeneratedRoute>,
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub unassigned_orders: Option<Vec<BackendUnassignedOrder>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendRouteSummary {
    pub total_orders: u32,
    pub assigned_orders: u32,
    pub unassigned_orders: u32,
    pub total_routes: u32,
    pub total_distance_km: f64,
    pub total_duration_minutes: f64,
    #[serde(default)]
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendGeneratedRoute {
    pub id: String,
    pub route_code: String,
    pub vehicle: BackendRouteVehicle,
    pub total_stops: u32,
    pub total_orders: u32,
    pub total_distance_km: f64,
    pub estimated_duration_minutes: f64,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    pub status: String,
    pub planned_date: String,
    #[serde(default)]
    pub estimated_start_time: Option<String>,
    #[serde(default)]
    pub estimated_end_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendRouteVehicle {
    pub id: String,
    #[serde(alias = "license_plate")]
    pub plate: String,
    pub vehicle_type: String,
    #[serde(default)]
    pub driver_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendUnassignedOrder {
    pub order_id: String,
    pub reason: String,
}

/// Respuesta de GET /routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendRouteList {
    #[serde(alias = "data")]
    pub routes: Vec<BackendRouteListItem>,
}

/// Ruta planificada con sus paradas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendRouteListItem {
    pub id: String,
    pub planned_date: String,
    #[serde(default)]
    pub vehicles: Vec<BackendRouteVehicle>,
    #[serde(default)]
    pub driver_name: Option<String>,
    pub status: String,
    #[serde(default)]
    pub stops: Vec<BackendRouteStop>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendRouteStop {
    pub order_id: String,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: String,
}
