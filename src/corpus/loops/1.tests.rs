use crate::core::spec::Spec;
use crate::{ensure, ensure_eq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: u32,
}

impl Product {
    pub fn new(id: u32, name: &str, description: &str, price: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }
}

pub trait CatalogApi {
    fn add_product(&mut self, product: Product);
    fn remove_product(&mut self, product_id: u32);
    /// Replaces the product with the same id, if there is one.
    fn update_product(&mut self, updated: Product);
    fn find_product_by_id(&self, product_id: u32) -> Option<&Product>;
    /// Products whose name or description contains `query`.
    fn search_products(&self, query: &str) -> Vec<Product>;
    fn list_all_products(&self) -> &[Product];
    /// By price, then by name.
    fn sort_products(&mut self);
}

fn laptop() -> Product {
    Product::new(1, "Laptop", "A high performance laptop", 1200)
}

fn smartphone() -> Product {
    Product::new(2, "Smartphone", "An innovative smartphone", 800)
}

pub fn spec<A: CatalogApi + Default>() -> Spec<A> {
    Spec::<A>::new()
        .case("should add a product successfully", |api| {
            api.add_product(laptop());

            ensure!(api.list_all_products().contains(&laptop()));
            Ok(())
        })
        .case("should remove a product successfully", |api| {
            api.add_product(laptop());
            api.remove_product(1);

            ensure!(!api.list_all_products().contains(&laptop()));
            Ok(())
        })
        .case("should update a product successfully", |api| {
            api.add_product(laptop());
            let updated = Product::new(
                1,
                "Laptop Pro",
                "A high performance laptop with extended battery",
                1500,
            );
            api.update_product(updated.clone());

            ensure!(api.list_all_products().contains(&updated));
            ensure!(!api.list_all_products().contains(&laptop()));
            Ok(())
        })
        .case("should find a product by id successfully", |api| {
            api.add_product(laptop());

            ensure_eq!(api.find_product_by_id(1), Some(&laptop()));
            ensure_eq!(api.find_product_by_id(9), None);
            Ok(())
        })
        .case("should search products successfully", |api| {
            api.add_product(laptop());
            api.add_product(smartphone());

            let results = api.search_products("Laptop");

            ensure!(results.contains(&laptop()));
            ensure!(!results.contains(&smartphone()));
            Ok(())
        })
        .case("should list all products", |api| {
            api.add_product(laptop());
            api.add_product(smartphone());

            let products = api.list_all_products();

            ensure!(products.contains(&laptop()));
            ensure!(products.contains(&smartphone()));
            Ok(())
        })
        .case("should sort products by price and name", |api| {
            let product1 = Product::new(1, "Laptop", "A high performance laptop", 1500);
            let product2 = smartphone();
            let product3 = Product::new(3, "Tablet", "A powerful tablet", 800);
            api.add_product(product1.clone());
            api.add_product(product3.clone());
            api.add_product(product2.clone());

            api.sort_products();

            ensure_eq!(api.list_all_products(), [product2, product3, product1]);
            Ok(())
        })
}
