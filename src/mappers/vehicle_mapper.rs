//! Conversión de vehículos backend → dominio
//!
//! La lista de vehículos disponibles llega en tres formas según la versión
//! del servicio de logística: `{vehicles: [...]}`, `{data: [...]}` o un
//! arreglo plano. Se prueban en ese orden; si ninguna encaja se registra un
//! warning y se devuelve una lista vacía.

use serde_json::Value;

use crate::dto::vehicle_dto::BackendVehicle;
use crate::models::vehicle::{Vehicle, VehicleDistributionCenter, VehicleStatus};

/// El backend no informa el tipo de combustible
pub const DEFAULT_FUEL_TYPE: &str = "diesel";

/// Forma reconocida de la respuesta de vehículos disponibles
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleListShape {
    Vehicles(Vec<BackendVehicle>),
    Data(Vec<BackendVehicle>),
    Bare(Vec<BackendVehicle>),
    Unrecognized,
}

fn decode_array(value: &Value) -> Option<Vec<BackendVehicle>> {
    if !value.is_array() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(vehicles) => Some(vehicles),
        Err(e) => {
            log::warn!("⚠️ Arreglo de vehículos con formato inesperado: {}", e);
            None
        }
    }
}

/// Identificar la forma de la respuesta, en orden de prioridad fijo
pub fn classify_vehicle_list(value: &Value) -> VehicleListShape {
    if let Some(vehicles) = value.get("vehicles").and_then(decode_array) {
        return VehicleListShape::Vehicles(vehicles);
    }
    if let Some(vehicles) = value.get("data").and_then(decode_array) {
        return VehicleListShape::Data(vehicles);
    }
    if let Some(vehicles) = decode_array(value) {
        return VehicleListShape::Bare(vehicles);
    }
    VehicleListShape::Unrecognized
}

/// Decodificar la lista de vehículos sin fallar nunca
pub fn decode_vehicle_list(value: &Value) -> Vec<BackendVehicle> {
    match classify_vehicle_list(value) {
        VehicleListShape::Vehicles(vehicles)
        | VehicleListShape::Data(vehicles)
        | VehicleListShape::Bare(vehicles) => vehicles,
        VehicleListShape::Unrecognized => {
            log::warn!("⚠️ Respuesta de vehículos no reconocida, se devuelve lista vacía");
            Vec::new()
        }
    }
}

/// Estado derivado de los flags del backend
pub fn derive_vehicle_status(is_available: bool, is_ready_for_route: bool) -> VehicleStatus {
    if !is_available {
        VehicleStatus::Maintenance
    } else if !is_ready_for_route {
        VehicleStatus::InUse
    } else {
        VehicleStatus::Available
    }
}

pub fn map_vehicle_to_domain(backend: BackendVehicle) -> Vehicle {
    // Sin el flag se asume listo para ruta
    let status = derive_vehicle_status(
        backend.is_available,
        backend.is_ready_for_route.unwrap_or(true),
    );

    let code = backend
        .distribution_center_code
        .unwrap_or_else(|| format!("CEDIS-{}", backend.distribution_center_id));

    Vehicle {
        id: backend.id,
        plate: backend.plate,
        vehicle_type: backend.vehicle_type,
        capacity_kg: backend.capacity_kg,
        status,
        fuel_type: DEFAULT_FUEL_TYPE.to_string(),
        driver_name: backend.driver_name,
        driver_phone: backend.driver_phone,
        distribution_center: VehicleDistributionCenter {
            id: backend.distribution_center_id,
            code,
            name: backend.distribution_center_name,
        },
    }
}

pub fn map_vehicle_list(value: &Value) -> Vec<Vehicle> {
    decode_vehicle_list(value)
        .into_iter()
        .map(map_vehicle_to_domain)
        .collect()
}
