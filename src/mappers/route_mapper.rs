//! Conversión de rutas entre dominio y backend
//!
//! Aplana el envelope de generación (`summary`, `routes[]`, `warnings`,
//! `errors`, `unassigned_orders[]`) conservando el orden de los arreglos.

use crate::dto::route_dto::{
    BackendGenerateRoutesRequest, BackendGenerateRoutesResponse, BackendGeneratedRoute,
    BackendRouteListItem, BackendRouteStop, BackendRouteSummary, BackendRouteVehicle,
    BackendUnassignedOrder,
};
use crate::models::route::{
    DeliveryRoute, DeliveryRouteOrder, GenerateRoutesRequest, GenerateRoutesResult, GeneratedRoute,
    RouteGenerationSummary, RouteVehicleSummary, UnassignedOrder,
};

/// Request de dominio → body del backend
pub fn map_generate_routes_request(
    request: GenerateRoutesRequest,
    created_by: &str,
) -> BackendGenerateRoutesRequest {
    BackendGenerateRoutesRequest {
        distribution_center_id: request.distribution_center_id,
        planned_date: request.planned_date,
        order_ids: request.order_ids,
        optimization_strategy: request.optimization_strategy,
        force_regenerate: request.force_regenerate,
        created_by: created_by.to_string(),
    }
}

pub fn map_generate_routes_response(backend: BackendGenerateRoutesResponse) -> GenerateRoutesResult {
    GenerateRoutesResult {
        status: backend.status,
        summary: map_route_summary(backend.summary),
        routes: backend
            .routes
            .into_iter()
            .map(map_generated_route_to_domain)
            .collect(),
        warnings: backend.warnings,
        errors: backend.errors,
        unassigned_orders: backend
            .unassigned_orders
            .map(|orders| orders.into_iter().map(map_unassigned_order).collect()),
    }
}

fn map_route_summary(backend: BackendRouteSummary) -> RouteGenerationSummary {
    RouteGenerationSummary {
        total_orders: backend.total_orders,
        assigned_orders: backend.assigned_orders,
        unassigned_orders: backend.unassigned_orders,
        total_routes: backend.total_routes,
        total_distance_km: backend.total_distance_km,
        total_duration_minutes: backend.total_duration_minutes,
        total_cost: backend.total_cost,
    }
}

pub fn map_generated_route_to_domain(backend: BackendGeneratedRoute) -> GeneratedRoute {
    GeneratedRoute {
        id: backend.id,
        route_code: backend.route_code,
        vehicle: map_route_vehicle(backend.vehicle),
        total_stops: backend.total_stops,
        total_orders: backend.total_orders,
        total_distance_km: backend.total_distance_km,
        estimated_duration_minutes: backend.estimated_duration_minutes,
        estimated_cost: backend.estimated_cost,
        status: backend.status,
        planned_date: backend.planned_date,
        estimated_start_time: backend.estimated_start_time,
        estimated_end_time: backend.estimated_end_time,
    }
}

fn map_route_vehicle(backend: BackendRouteVehicle) -> RouteVehicleSummary {
    RouteVehicleSummary {
        id: backend.id,
        plate: backend.plate,
        vehicle_type: backend.vehicle_type,
        driver_name: backend.driver_name,
    }
}

fn map_unassigned_order(backend: BackendUnassignedOrder) -> UnassignedOrder {
    UnassignedOrder {
        order_id: backend.order_id,
        reason: backend.reason,
    }
}

/// Ruta planificada → fila del listado
///
/// El conductor sale de la ruta o, en su defecto, del primer vehículo que lo tenga.
pub fn map_delivery_route(backend: BackendRouteListItem) -> DeliveryRoute {
    let driver = backend
        .driver_name
        .clone()
        .or_else(|| backend.vehicles.iter().find_map(|v| v.driver_name.clone()))
        .unwrap_or_default();

    DeliveryRoute {
        id: backend.id,
        date: backend.planned_date,
        vehicles: backend.vehicles.into_iter().map(|v| v.plate).collect(),
        driver,
        status: backend.status,
        orders: backend.stops.into_iter().map(map_route_stop).collect(),
    }
}

fn map_route_stop(backend: BackendRouteStop) -> DeliveryRouteOrder {
    let destination = match backend.city {
        Some(city) if !city.trim().is_empty() => format!("{}, {}", backend.address, city),
        _ => backend.address,
    };

    DeliveryRouteOrder {
        id: backend.order_id,
        destination,
        detail: backend.notes.unwrap_or_default(),
        status: backend.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::route::{GenerationStatus, OptimizationStrategy};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn generation_payload() -> serde_json::Value {
        json!({
            "status": "partial",
            "summary": {
                "total_orders": 3,
                "assigned_orders": 2,
                "unassigned_orders": 1,
                "total_routes": 2,
                "total_distance_km": 42.5,
                "total_duration_minutes": 180.0,
                "total_cost": 250000.0
            },
            "routes": [
                {
                    "id": "r-1",
                    "route_code": "RUT-001",
                    "vehicle": { "id": "v-1", "plate": "ABC-123", "vehicle_type": "van", "driver_name": "Carlos Pérez" },
                    "total_stops": 1,
                    "total_orders": 1,
                    "total_distance_km": 20.0,
                    "estimated_duration_minutes": 90.0,
                    "status": "planned",
                    "planned_date": "2025-11-10",
                    "estimated_start_time": "2025-11-10T07:00:00Z"
                },
                {
                    "id": "r-2",
                    "route_code": "RUT-002",
                    "vehicle": { "id": "v-2", "plate": "XYZ-987", "vehicle_type": "truck" },
                    "total_stops": 1,
                    "total_orders": 1,
                    "total_distance_km": 22.5,
                    "estimated_duration_minutes": 90.0,
                    "estimated_cost": 120000.0,
                    "status": "planned",
                    "planned_date": "2025-11-10"
                }
            ],
            "warnings": ["Pedido o-3 sin coordenadas"],
            "unassigned_orders": [{ "order_id": "o-3", "reason": "missing_coordinates" }]
        })
    }

    #[test]
    fn test_map_generation_envelope() {
        let backend: BackendGenerateRoutesResponse =
            serde_json::from_value(generation_payload()).unwrap();
        let result = map_generate_routes_response(backend);

        assert_eq!(result.status, GenerationStatus::Partial);
        assert_eq!(result.summary.total_orders, 3);
        assert_eq!(result.summary.unassigned_orders, 1);
        assert_eq!(result.summary.total_cost, Some(250000.0));
        assert_eq!(
            result.routes.iter().map(|r| r.route_code.as_str()).collect::<Vec<_>>(),
            vec!["RUT-001", "RUT-002"]
        );
        assert_eq!(result.routes[0].vehicle.driver_name.as_deref(), Some("Carlos Pérez"));
        assert_eq!(result.routes[0].estimated_cost, None);
        assert_eq!(result.routes[1].estimated_cost, Some(120000.0));
        assert_eq!(result.warnings, Some(vec!["Pedido o-3 sin coordenadas".to_string()]));
        assert_eq!(result.errors, None);
        assert_eq!(
            result.unassigned_orders,
            Some(vec![UnassignedOrder {
                order_id: "o-3".to_string(),
                reason: "missing_coordinates".to_string()
            }])
        );
    }

    #[test]
    fn test_absent_optional_arrays_stay_none() {
        let mut payload = generation_payload();
        let obj = payload.as_object_mut().unwrap();
        obj.remove("warnings");
        obj.remove("unassigned_orders");
        let result = map_generate_routes_response(serde_json::from_value(payload).unwrap());

        assert_eq!(result.warnings, None);
        assert_eq!(result.unassigned_orders, None);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("warnings").is_none());
        assert!(json.get("unassignedOrders").is_none());
    }

    #[test]
    fn test_map_generate_request() {
        let request = GenerateRoutesRequest {
            distribution_center_id: "1".to_string(),
            planned_date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            order_ids: vec!["o-1".to_string(), "o-2".to_string()],
            optimization_strategy: OptimizationStrategy::MinimizeDistance,
            force_regenerate: true,
        };
        let body = serde_json::to_value(map_generate_routes_request(request, "admin")).unwrap();

        assert_eq!(
            body,
            json!({
                "distribution_center_id": "1",
                "planned_date": "2025-11-10",
                "order_ids": ["o-1", "o-2"],
                "optimization_strategy": "minimize_distance",
                "force_regenerate": true,
                "created_by": "admin"
            })
        );
    }

    #[test]
    fn test_map_delivery_route() {
        let backend: BackendRouteListItem = serde_json::from_value(json!({
            "id": "R-001",
            "planned_date": "2025-11-10",
            "vehicles": [
                { "id": "v-1", "plate": "ABC-123", "vehicle_type": "van", "driver_name": "Carlos Pérez" },
                { "id": "v-2", "plate": "XYZ-987", "vehicle_type": "van" }
            ],
            "status": "en_curso",
            "stops": [
                { "order_id": "P-100", "address": "Cra 7 # 45-10", "city": "Bogotá", "notes": "Recibe farmacia", "status": "pendiente" },
                { "order_id": "P-101", "address": "Cl 80 # 20-15", "status": "entregado" }
            ]
        }))
        .unwrap();

        let route = map_delivery_route(backend);
        assert_eq!(route.date, "2025-11-10");
        assert_eq!(route.vehicles, vec!["ABC-123", "XYZ-987"]);
        assert_eq!(route.driver, "Carlos Pérez");
        assert_eq!(route.orders[0].destination, "Cra 7 # 45-10, Bogotá");
        assert_eq!(route.orders[0].detail, "Recibe farmacia");
        assert_eq!(route.orders[1].destination, "Cl 80 # 20-15");
        assert_eq!(route.orders[1].detail, "");
    }
}
