#![allow(clippy::needless_range_loop)]

use super::spec_1::{CatalogApi, Product};

#[derive(Default)]
struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    fn remove_product(&mut self, product_id: u32) {
        for i in 0..self.products.len() {
            if self.products[i].id == product_id {
                self.products.remove(i);
                break;
            }
        }
    }

    fn update_product(&mut self, updated: Product) {
        for i in 0..self.products.len() {
            if self.products[i].id == updated.id {
                self.products[i] = updated;
                break;
            }
        }
    }

    fn find_product_by_id(&self, product_id: u32) -> Option<&Product> {
        for i in 0..self.products.len() {
            if self.products[i].id == product_id {
                return Some(&self.products[i]);
            }
        }
        None
    }

    fn search_products(&self, query: &str) -> Vec<Product> {
        let mut results = Vec::new();
        for i in 0..self.products.len() {
            if self.products[i].name.contains(query) || self.products[i].description.contains(query)
            {
                results.push(self.products[i].clone());
            }
        }
        results
    }

    fn sort_products(&mut self) {
        let n = self.products.len();
        for i in 0..n {
            for j in 0..n.saturating_sub(i + 1) {
                let (a, b) = (&self.products[j], &self.products[j + 1]);
                if a.price > b.price || (a.price == b.price && a.name > b.name) {
                    self.products.swap(j, j + 1);
                }
            }
        }
    }
}

#[derive(Default)]
pub struct Api {
    product_catalog: ProductCatalog,
}

impl CatalogApi for Api {
    fn add_product(&mut self, product: Product) {
        self.product_catalog.add_product(product);
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
