use super::spec_1::{CatalogApi, Product};

#[derive(Default)]
struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    fn remove_product(&mut self, product_id: u32) {
        self.products.retain(|product| product.id != product_id);
    }

    fn update_product(&mut self, updated: Product) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == updated.id) {
            *product = updated;
        }
    }

    fn find_product_by_id(&self, product_id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    fn search_products(&self, query: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| product.name.contains(query) || product.description.contains(query))
            .cloned()
            .collect()
    }

    fn sort_products(&mut self) {
        self.products
            .sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.name.cmp(&b.name)));
    }
}

#[derive(Default)]
pub struct Api {
    product_catalog: ProductCatalog,
}

impl CatalogApi for Api {
    fn add_product(&mut self, product: Product) {
        self.product_catalog.products.push(product);
    }

    fn remove_product(&mut self, product_id: u32) {
        self.product_catalog.remove_product(product_id);
    }

    fn update_product(&mut self, updated: Product) {
        self.product_catalog.update_product(updated);
    }

    fn find_product_by_id(&self, product_id: u32) -> Option<&Product> {
        self.product_catalog.find_product_by_id(product_id)
    }

    fn search_products(&self, query: &str) -> Vec<Product> {
        self.product_catalog.search_products(query)
    }

    fn list_all_products(&self) -> &[Product] {
        &self.product_catalog.products
    }

    fn sort_products(&mut self) {
        self.product_catalog.sort_products();
    }
}
