//! Backend falso para tests de integración
//!
//! Levanta un router axum en 127.0.0.1:0 y devuelve su URL base.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use serde_json::{json, Value};

/// Queries recibidas por el backend falso, en orden de llegada
pub type SeenQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake backend");
    });
    format!("http://{}", addr)
}

pub fn backend_order(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "order_number": format!("PED-{}", id),
        "customer_id": "c-1",
        "seller_id": "s-1",
        "status": status,
        "subtotal": "100000.00",
        "discount_amount": "0",
        "tax_amount": "19000.00",
        "total_amount": "119000.00",
        "delivery_address": "Calle 10 # 5-20",
        "delivery_city": "Bogotá",
        "delivery_department": "Cundinamarca",
        "delivery_date": "2025-11-12",
        "created_at": "2025-11-01T10:00:00Z",
        "updated_at": "2025-11-01T10:00:00Z",
        "customer": {
            "id": "c-1",
            "business_name": "Clínica San Rafael",
            "document_type": "NIT",
            "document_number": "900123456",
            "customer_type": "hospital"
        }
    })
}

pub fn backend_vehicle(id: &str, plate: &str) -> Value {
    json!({
        "id": id,
        "plate": plate,
        "vehicle_type": "van",
        "capacity_kg": 1200.0,
        "is_available": true,
        "is_ready_for_route": true,
        "driver_name": "Carlos Pérez",
        "distribution_center_id": "1",
        "distribution_center_code": "CEDIS-BOG"
    })
}
