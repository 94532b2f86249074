use crate::dto::common_dto::BackendPage;
use crate::dto::product_dto::BackendProduct;
use crate::models::filters::Paginated;
use crate::models::product::Product;
use crate::view_state::pagination::total_pages;

pub fn map_product_to_domain(backend: BackendProduct) -> Product {
    Product {
        id: backend.id,
        sku: backend.sku,
        name: backend.name,
        description: backend.description,
        category: backend.category,
        supplier_id: backend.supplier_id,
        unit_price: backend.unit_price,
        requires_cold_chain: backend.requires_cold_chain,
        is_active: backend.is_active,
    }
}

pub fn map_products_page(page: BackendPage<BackendProduct>) -> Paginated<Product> {
    Paginated {
        total_pages: total_pages(page.total, page.per_page),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        items: page.items.into_iter().map(map_product_to_domain).collect(),
    }
}
