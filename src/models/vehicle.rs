//! Modelo de Vehicle (dominio)
//!
//! El estado del vehículo no viene del backend: se deriva de dos flags
//! (`is_available`, `is_ready_for_route`) en el mapper.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::query::{QueryParams, ToQueryParams};

/// Estado derivado del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    InUse,
    Maintenance,
}

/// Vehicle principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub plate: String,
    pub vehicle_type: String,
    pub capacity_kg: f64,
    pub status: VehicleStatus,
    /// Siempre "diesel": el backend no informa el combustible
    pub fuel_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_phone: Option<String>,
    pub distribution_center: VehicleDistributionCenter,
}

/// Centro de distribución de origen del vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDistributionCenter {
    pub id: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Filtros para vehículos disponibles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableVehiclesQuery {
    pub distribution_center_id: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ToQueryParams for AvailableVehiclesQuery {
    fn to_query_params(&self) -> QueryParams {
        QueryParams::new()
            .push("distribution_center_id", self.distribution_center_id.as_ref())
            .push("date", self.date.as_ref())
    }
}
