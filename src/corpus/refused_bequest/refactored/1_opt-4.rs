use super::spec_1::{InventoryApi, ToolInfo};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Price(f64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Weight(f64);

#[derive(Debug, Clone, Copy, PartialEq)]
enum ProductKind {
    Catalog { weight: Weight },
    Tool,
}

#[derive(Debug, Clone)]
struct Product {
    name: String,
    price: Price,
    inventory_count: i64,
    kind: ProductKind,
}

impl Product {
    fn update_inventory(&mut self, count: i64) {
        self.inventory_count += count;
    }

    fn is_available(&self) -> bool {
        self.inventory_count > 0
    }

    fn shipping_cost(&self) -> Option<f64> {
        const BASE_COST: f64 = 5.0;
        match self.kind {
            ProductKind::Catalog { weight } => Some(weight.0 * 0.5 + BASE_COST),
            ProductKind::Tool => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tool {
    name: String,
}

impl ToolInfo for Tool {
    fn maintenance_schedule(&self) -> String {
        format!("Maintenance required every 6 months for {}.", self.name)
    }

    fn safety_guidelines(&self) -> String {
        format!(
            "Safety guidelines for {}:\n1. Wear safety goggles\n2. Keep out of reach of children",
            self.name
        )
    }
}

#[derive(Default)]
struct InventoryService {
    products: Vec<Product>,
}

impl InventoryService {
    fn find(&self, product_name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == product_name)
    }

    fn find_mut(&mut self, product_name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name == product_name)
    }
}

#[derive(Default)]
pub struct Api {
    inventory_service: InventoryService,
}

impl Api {
    fn add_product(&mut self, name: &str, price: f64, inventory_count: i64, kind: ProductKind) {
        self.inventory_service.products.push(Product {
            name: name.to_string(),
            price: Price(price),
            inventory_count,
            kind,
        });
    }
}

impl InventoryApi for Api {
    type Tool = Tool;

    fn create_catalog_product(&mut self, name: &str, price: f64, inventory_count: i64, weight: f64) {
        self.add_product(
            name,
            price,
            inventory_count,
            ProductKind::Catalog {
                weight: Weight(weight),
            },
        );
    }

    fn create_tool(&mut self, name: &str, price: f64, inventory_count: i64) -> Tool {
        self.add_product(name, price, inventory_count, ProductKind::Tool);
        Tool {
            name: name.to_string(),
        }
    }

    fn update_inventory(&mut self, product_name: &str, count: i64) {
        if let Some(product) = self.inventory_service.find_mut(product_name) {
            product.update_inventory(count);
        }
    }

    fn check_availability(&self, product_name: &str) -> bool {
        self.inventory_service
            .find(product_name)
            .is_some_and(Product::is_available)
    }

    fn get_shipping_cost(&self, product_name: &str) -> Option<f64> {
        self.inventory_service.find(product_name)?.shipping_cost()
    }

    fn get_price(&self, product_name: &str) -> Option<f64> {
        self.inventory_service
            .find(product_name)
            .map(|p| p.price.0)
    }
}
