//! Conversión de pedidos backend → dominio
//!
//! Renombrado 1:1; los opcionales ausentes quedan en `None`.

use crate::dto::common_dto::BackendPage;
use crate::dto::order_dto::{BackendBulkUpdateResponse, BackendCustomer, BackendOrder, BackendOrderItem};
use crate::models::filters::Paginated;
use crate::models::order::{BulkUpdateResult, Customer, Order, OrderItem};
use crate::view_state::pagination::total_pages;

pub fn map_order_to_domain(backend: BackendOrder) -> Order {
    Order {
        id: backend.id,
        order_number: backend.order_number,
        customer_id: backend.customer_id,
        seller_id: backend.seller_id,
        status: backend.status,
        subtotal: backend.subtotal,
        discount_amount: backend.discount_amount,
        tax_amount: backend.tax_amount,
        total_amount: backend.total_amount,
        delivery_address: backend.delivery_address,
        delivery_city: backend.delivery_city,
        delivery_department: backend.delivery_department,
        delivery_date: backend.delivery_date,
        delivery_latitude: backend.delivery_latitude,
        delivery_longitude: backend.delivery_longitude,
        created_at: backend.created_at,
        updated_at: backend.updated_at,
        customer: map_customer_to_domain(backend.customer),
        items: backend
            .items
            .map(|items| items.into_iter().map(map_order_item_to_domain).collect()),
    }
}

pub fn map_customer_to_domain(backend: BackendCustomer) -> Customer {
    Customer {
        id: backend.id,
        business_name: backend.business_name,
        document_type: backend.document_type,
        document_number: backend.document_number,
        customer_type: backend.customer_type,
        contact_name: backend.contact_name,
        contact_phone: backend.contact_phone,
        contact_email: backend.contact_email,
        address: backend.address,
        city: backend.city,
        department: backend.department,
    }
}

pub fn map_order_item_to_domain(backend: BackendOrderItem) -> OrderItem {
    OrderItem {
        id: backend.id,
        product_sku: backend.product_sku,
        product_name: backend.product_name,
        quantity: backend.quantity,
        unit_price: backend.unit_price,
        discount_percentage: backend.discount_percentage,
        tax_percentage: backend.tax_percentage,
        distribution_center_code: backend.distribution_center_code,
        stock_confirmed: backend.stock_confirmed,
        subtotal: backend.subtotal,
        discount_amount: backend.discount_amount,
        tax_amount: backend.tax_amount,
        total: backend.total,
    }
}

/// Página de pedidos; `total_pages` se recalcula localmente
pub fn map_orders_page(page: BackendPage<BackendOrder>) -> Paginated<Order> {
    Paginated {
        total_pages: total_pages(page.total, page.per_page),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        items: page.items.into_iter().map(map_order_to_domain).collect(),
    }
}

pub fn map_bulk_update_result(backend: BackendBulkUpdateResponse) -> BulkUpdateResult {
    BulkUpdateResult {
        success: backend.success,
        updated_count: backend.updated_count,
    }
}

impl From<BackendOrder> for Order {
    fn from(backend: BackendOrder) -> Self {
        map_order_to_domain(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderStatus;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn full_backend_order() -> serde_json::Value {
        json!({
            "id": "ord-1",
            "order_number": "PED-2025-0001",
            "customer_id": "cus-1",
            "seller_id": "sel-1",
            "status": "confirmed",
            "subtotal": 1000,
            "discount_amount": 100,
            "tax_amount": 171,
            "total_amount": 1071,
            "delivery_address": "Calle 100 # 15-20",
            "delivery_city": "Bogotá",
            "delivery_department": "Cundinamarca",
            "delivery_date": "2025-11-12",
            "delivery_latitude": 4.6867,
            "delivery_longitude": -74.0486,
            "created_at": "2025-11-01T10:00:00Z",
            "updated_at": "2025-11-02T08:30:00Z",
            "customer": {
                "id": "cus-1",
                "business_name": "Clínica San Rafael",
                "document_type": "NIT",
                "document_number": "900123456-7",
                "customer_type": "hospital",
                "contact_name": "Laura Gómez",
                "contact_phone": "+57 300 000 0000",
                "contact_email": "compras@sanrafael.co",
                "address": "Cra 7 # 45-10",
                "city": "Bogotá",
                "department": "Cundinamarca"
            },
            "items": [{
                "id": "it-1",
                "product_sku": "GLV-LAT-M",
                "product_name": "Guantes de látex talla M",
                "quantity": 10,
                "unit_price": 100,
                "discount_percentage": 10,
                "tax_percentage": 19,
                "distribution_center_code": "CEDIS-BOG",
                "stock_confirmed": true,
                "subtotal": 1000,
                "discount_amount": 100,
                "tax_amount": 171,
                "total": 1071
            }]
        })
    }

    #[test]
    fn test_map_order_keeps_every_field() {
        let backend: BackendOrder = serde_json::from_value(full_backend_order()).unwrap();
        let order = map_order_to_domain(backend);

        assert_eq!(order.id, "ord-1");
        assert_eq!(order.order_number, "PED-2025-0001");
        assert_eq!(order.customer_id, "cus-1");
        assert_eq!(order.seller_id, "sel-1");
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.subtotal, Decimal::from(1000));
        assert_eq!(order.discount_amount, Decimal::from(100));
        assert_eq!(order.tax_amount, Decimal::from(171));
        assert_eq!(order.total_amount, Decimal::from(1071));
        assert_eq!(order.delivery_address, "Calle 100 # 15-20");
        assert_eq!(order.delivery_city, "Bogotá");
        assert_eq!(order.delivery_department, "Cundinamarca");
        assert_eq!(order.delivery_date, "2025-11-12");
        assert_eq!(order.delivery_latitude, Some(4.6867));
        assert_eq!(order.delivery_longitude, Some(-74.0486));
        assert_eq!(order.created_at, "2025-11-01T10:00:00Z");
        assert_eq!(order.updated_at, "2025-11-02T08:30:00Z");

        let customer = &order.customer;
        assert_eq!(customer.business_name, "Clínica San Rafael");
        assert_eq!(customer.document_type, "NIT");
        assert_eq!(customer.document_number, "900123456-7");
        assert_eq!(customer.customer_type, "hospital");
        assert_eq!(customer.contact_name.as_deref(), Some("Laura Gómez"));
        assert_eq!(customer.contact_phone.as_deref(), Some("+57 300 000 0000"));
        assert_eq!(customer.contact_email.as_deref(), Some("compras@sanrafael.co"));
        assert_eq!(customer.address.as_deref(), Some("Cra 7 # 45-10"));
        assert_eq!(customer.city.as_deref(), Some("Bogotá"));
        assert_eq!(customer.department.as_deref(), Some("Cundinamarca"));

        let items = order.items.as_ref().unwrap();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.product_sku, "GLV-LAT-M");
        assert_eq!(item.product_name, "Guantes de látex talla M");
        assert_eq!(item.quantity, 10);
        assert_eq!(item.unit_price, Decimal::from(100));
        assert_eq!(item.discount_percentage, Decimal::from(10));
        assert_eq!(item.tax_percentage, Decimal::from(19));
        assert_eq!(item.distribution_center_code, "CEDIS-BOG");
        assert!(item.stock_confirmed);
        assert_eq!(item.total, Decimal::from(1071));
    }

    #[test]
    fn test_domain_json_has_no_snake_case_keys_and_same_field_count() {
        let raw = full_backend_order();
        let backend: BackendOrder = serde_json::from_value(raw.clone()).unwrap();
        let domain = serde_json::to_value(map_order_to_domain(backend)).unwrap();

        let backend_keys = raw.as_object().unwrap().len();
        let domain_obj = domain.as_object().unwrap();
        assert_eq!(domain_obj.len(), backend_keys);
        assert!(domain_obj.keys().all(|k| !k.contains('_')));
        assert!(domain_obj.contains_key("orderNumber"));
        assert!(domain_obj.contains_key("deliveryLatitude"));
        assert_eq!(
            domain["customer"].as_object().unwrap().len(),
            raw["customer"].as_object().unwrap().len()
        );
        assert_eq!(
            domain["items"][0].as_object().unwrap().len(),
            raw["items"][0].as_object().unwrap().len()
        );
    }

    #[test]
    fn test_missing_optionals_stay_none() {
        let mut raw = full_backend_order();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("items");
        obj.remove("delivery_latitude");
        obj.remove("delivery_longitude");
        obj["customer"].as_object_mut().unwrap().remove("contact_email");

        let order = map_order_to_domain(serde_json::from_value(raw).unwrap());
        assert_eq!(order.items, None);
        assert_eq!(order.delivery_latitude, None);
        assert_eq!(order.delivery_longitude, None);
        assert_eq!(order.customer.contact_email, None);
    }

    #[test]
    fn test_map_orders_page() {
        let page: BackendPage<BackendOrder> = serde_json::from_value(json!({
            "orders": [full_backend_order()],
            "total": 41,
            "page": 2,
            "per_page": 20
        }))
        .unwrap();

        let mapped = map_orders_page(page);
        assert_eq!(mapped.items.len(), 1);
        assert_eq!(mapped.total, 41);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.per_page, 20);
        assert_eq!(mapped.total_pages, 3);
    }
}
