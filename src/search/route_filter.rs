//! Filtro por texto sobre rutas ya cargadas
//!
//! Insensible a mayúsculas. Una ruta coincide si el texto recortado aparece
//! en su id, fecha, vehículos, conductor, estado, o en el id, destino,
//! detalle o estado de cualquiera de sus pedidos. El texto tiene que caber
//! dentro de un solo campo. Un filtro vacío deja pasar todas las rutas.

use crate::models::route::DeliveryRoute;

/// Campos buscables, cada uno por separado; un pedido aporta un solo campo
fn searchable_fields(route: &DeliveryRoute) -> Vec<String> {
    let mut fields = vec![
        route.id.clone(),
        route.date.clone(),
        route.vehicles.join(" "),
        route.driver.clone(),
        route.status.clone(),
    ];
    fields.extend(
        route
            .orders
            .iter()
            .map(|o| format!("{} {} {} {}", o.id, o.destination, o.detail, o.status)),
    );
    fields
}

pub fn route_matches(route: &DeliveryRoute, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    searchable_fields(route)
        .iter()
        .any(|f| f.to_lowercase().contains(&needle))
}

pub fn filter_routes<'a>(routes: &'a [DeliveryRoute], filter: &str) -> Vec<&'a DeliveryRoute> {
    routes.iter().filter(|r| route_matches(r, filter)).collect()
}
