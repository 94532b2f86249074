//! Modelo de rutas (dominio)
//!
//! Resultado de la generación de rutas, request de generación y la vista
//! de rutas planificadas usada por la búsqueda en cliente.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::query::{QueryParams, ToQueryParams};

/// Estrategia de optimización enviada al servicio de logística
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationStrategy {
    #[default]
    Balanced,
    MinimizeDistance,
    MinimizeTime,
    MinimizeCost,
}

/// Estado global de la generación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Success,
    Partial,
    Failed,
}

/// Request de generación de rutas desde la UI
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoutesRequest {
    #[validate(length(min = 1, message = "El centro de distribución es requerido"))]
    pub distribution_center_id: String,
    pub planned_date: NaiveDate,
    #[validate(length(min = 1, message = "Debe seleccionar al menos un pedido"))]
    pub order_ids: Vec<String>,
    #[serde(default)]
    pub optimization_strategy: OptimizationStrategy,
    #[serde(default)]
    pub force_regenerate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoutesResult {
    pub status: GenerationStatus,
    pub summary: RouteGenerationSummary,
    pub routes: Vec<GeneratedRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unassigned_orders: Option<Vec<UnassignedOrder>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGenerationSummary {
    pub total_orders: u32,
    pub assigned_orders: u32,
    pub unassigned_orders: u32,
    pub total_routes: u32,
    pub total_distance_km: f64,
    pub total_duration_minutes: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRoute {
    pub id: String,
    pub route_code: String,
    pub vehicle: RouteVehicleSummary,
    pub total_stops: u32,
    pub total_orders: u32,
    pub total_distance_km: f64,
    pub estimated_duration_minutes: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    pub status: String,
    pub planned_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteVehicleSummary {
    pub id: String,
    pub plate: String,
    pub vehicle_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedOrder {
    pub order_id: String,
    pub reason: String,
}

/// Ruta de entrega planificada, tal como se lista en la UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRoute {
    pub id: String,
    pub date: String,
    pub vehicles: Vec<String>,
    pub driver: String,
    pub status: String,
    pub orders: Vec<DeliveryRouteOrder>,
}

/// Pedido dentro de una ruta planificada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRouteOrder {
    pub id: String,
    pub destination: String,
    pub detail: String,
    pub status: String,
}

/// Filtros del listado de rutas
///
/// `q` no viaja al backend: se aplica en memoria sobre la lista cargada.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteListFilters {
    pub distribution_center_id: Option<String>,
    pub planned_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub q: Option<String>,
}

impl ToQueryParams for RouteListFilters {
    fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .push("distribution_center_id", self.distribution_center_id.as_ref())
            .push("planned_date", self.planned_date.as_ref())
            .push("status", self.status.as_ref())
    }
}
