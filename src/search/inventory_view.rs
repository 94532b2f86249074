//! Agregados sobre la ubicación de producto ya cargada
//!
//! Los agregados se calculan sobre los ítems en memoria (la página actual),
//! no sobre el total del backend. Se recalculan en cada llamada, así que
//! reemplazar los ítems nunca deja valores viejos.

use std::collections::HashSet;

use crate::models::inventory::{ProductLocationItem, ProductLocationSummary};

pub fn total_quantity(items: &[ProductLocationItem]) -> i64 {
    items.iter().map(|i| i.batch.quantity).sum()
}

pub fn total_available(items: &[ProductLocationItem]) -> i64 {
    items.iter().map(|i| i.batch.available_quantity).sum()
}

/// Ubicaciones físicas distintas (centro + pasillo/estante/nivel/posición)
pub fn distinct_locations(items: &[ProductLocationItem]) -> usize {
    items
        .iter()
        .map(|i| {
            let loc = &i.location;
            (&i.distribution_center.id, &loc.aisle, &loc.shelf, &loc.level, &loc.position)
        })
        .collect::<HashSet<_>>()
        .len()
}

pub fn distribution_center_count(items: &[ProductLocationItem]) -> usize {
    items
        .iter()
        .map(|i| &i.distribution_center.id)
        .collect::<HashSet<_>>()
        .len()
}

pub fn refrigerated_count(items: &[ProductLocationItem]) -> usize {
    items.iter().filter(|i| i.location.is_refrigerated()).count()
}

pub fn expired_count(items: &[ProductLocationItem]) -> usize {
    items.iter().filter(|i| i.batch.is_expired).count()
}

pub fn near_expiry_count(items: &[ProductLocationItem]) -> usize {
    items.iter().filter(|i| i.batch.is_near_expiry).count()
}

/// Resumen de un conjunto de ítems, sin copiarlos
pub fn summarize(items: &[ProductLocationItem]) -> ProductLocationSummary {
    ProductLocationSummary {
        total_quantity: total_quantity(items),
        total_available: total_available(items),
        distinct_locations: distinct_locations(items),
        distribution_centers: distribution_center_count(items),
        refrigerated_locations: refrigerated_count(items),
        expired_batches: expired_count(items),
        near_expiry_batches: near_expiry_count(items),
        has_results: !items.is_empty(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductLocationView {
    items: Vec<ProductLocationItem>,
}

impl ProductLocationView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ProductLocationItem>) -> Self {
        Self { items }
    }

    /// Reemplazar los ítems cargados (nuevo fetch)
    pub fn set_items(&mut self, items: Vec<ProductLocationItem>) {
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[ProductLocationItem] {
        &self.items
    }

    pub fn has_results(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn total_quantity(&self) -> i64 {
        total_quantity(&self.items)
    }

    pub fn total_available(&self) -> i64 {
        total_available(&self.items)
    }

    pub fn distinct_locations(&self) -> usize {
        distinct_locations(&self.items)
    }

    pub fn distribution_center_count(&self) -> usize {
        distribution_center_count(&self.items)
    }

    pub fn refrigerated_count(&self) -> usize {
        refrigerated_count(&self.items)
    }

    pub fn expired_count(&self) -> usize {
        expired_count(&self.items)
    }

    pub fn near_expiry_count(&self) -> usize {
        near_expiry_count(&self.items)
    }

    pub fn summary(&self) -> ProductLocationSummary {
        summarize(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inventory::{Batch, DistributionCenter, PhysicalLocation};

    fn item(center: &str, aisle: &str, zone: &str, quantity: i64) -> ProductLocationItem {
        ProductLocationItem {
            batch: Batch {
                id: format!("b-{center}-{aisle}"),
                batch_number: "L-1".to_string(),
                expiry_date: "2026-06-30".to_string(),
                manufacture_date: None,
                quantity,
                reserved_quantity: 10,
                available_quantity: quantity - 10,
                is_expired: false,
                is_near_expiry: aisle == "B",
                is_quarantined: false,
                is_available: true,
            },
            location: PhysicalLocation {
                aisle: aisle.to_string(),
                shelf: "1".to_string(),
                level: "1".to_string(),
                position: None,
                zone_type: zone.to_string(),
                temperature_range: None,
            },
            distribution_center: DistributionCenter {
                id: center.to_string(),
                code: format!("CEDIS-{center}"),
                name: format!("Centro {center}"),
                city: None,
            },
        }
    }

    #[test]
    fn test_total_quantity_of_two_items() {
        let view = ProductLocationView::with_items(vec![
            item("1", "A", "ambient", 100),
            item("1", "B", "refrigerated", 100),
        ]);
        assert_eq!(view.total_quantity(), 200);
        assert!(view.has_results());
    }

    #[test]
    fn test_empty_view() {
        let view = ProductLocationView::new();
        assert_eq!(view.total_quantity(), 0);
        assert!(!view.has_results());
        assert_eq!(view.summary(), ProductLocationSummary::default());
    }

    #[test]
    fn test_recomputes_after_items_replaced() {
        let mut view = ProductLocationView::with_items(vec![item("1", "A", "ambient", 100)]);
        assert_eq!(view.total_quantity(), 100);

        view.set_items(vec![item("2", "C", "refrigerated", 30), item("2", "D", "Refrigerated", 5)]);
        assert_eq!(view.total_quantity(), 35);
        assert_eq!(view.refrigerated_count(), 2);

        view.clear();
        assert_eq!(view.total_quantity(), 0);
        assert!(!view.has_results());
    }

    #[test]
    fn test_distinct_counts() {
        let view = ProductLocationView::with_items(vec![
            item("1", "A", "ambient", 10),
            item("1", "A", "ambient", 20),
            item("1", "B", "refrigerated", 30),
            item("2", "A", "ambient", 40),
        ]);
        let summary = view.summary();
        assert_eq!(summary.distinct_locations, 3);
        assert_eq!(summary.distribution_centers, 2);
        assert_eq!(summary.refrigerated_locations, 1);
        assert_eq!(summary.near_expiry_batches, 1);
        assert_eq!(summary.total_available, 60);
    }

    #[test]
    fn test_summarize_slice_matches_view() {
        let items = vec![
            item("1", "A", "ambient", 50),
            item("2", "B", "refrigerated", 70),
        ];
        let summary = summarize(&items);
        assert_eq!(summary, ProductLocationView::with_items(items.clone()).summary());
        assert_eq!(summary.total_quantity, 120);
        assert_eq!(summary.distribution_centers, 2);
        assert!(summary.has_results);
        // los ítems siguen siendo del llamador
        assert_eq!(items.len(), 2);
    }
}
