use serde::{Deserialize, Serialize};

// Vehículo tal como lo entrega el servicio de logística
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendVehicle {
    pub id: String,
    #[serde(alias = "license_plate")]
    pub plate: String,
    pub vehicle_type: String,
    pub capacity_kg: f64,
    pub is_available: bool,
    #[serde(default)]
    pub is_ready_for_route: Option<bool>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub driver_phone: Option<String>,
    pub distribution_center_id: String,
    #[serde(default)]
    pub distribution_center_code: Option<String>,
    #[serde(default)]
    pub distribution_center_name: Option<String>,
}
