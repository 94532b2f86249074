//! Filtro por texto sobre la página de pedidos cargada
//!
//! Campos: número de pedido, razón social y documento del cliente,
//! estado y ciudad de entrega.

use crate::models::order::Order;

pub fn order_matches(order: &Order, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [
        order.order_number.as_str(),
        order.customer.business_name.as_str(),
        order.customer.document_number.as_str(),
        order.status.as_str(),
        order.delivery_city.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_orders<'a>(orders: &'a [Order], filter: &str) -> Vec<&'a Order> {
    orders.iter().filter(|o| order_matches(o, filter)).collect()
}
