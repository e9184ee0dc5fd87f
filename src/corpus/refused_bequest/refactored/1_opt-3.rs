use super::spec_1::{InventoryApi, ToolInfo};

#[derive(Debug, Clone)]
struct ProductDetails {
    name: String,
    price: f64,
    inventory_count: i64,
}

trait Shippable {
    fn shipping_cost(&self) -> f64;
}

/// What every product shares. Shipping is opt-in through `as_shippable`.
trait Product {
    fn details(&self) -> &ProductDetails;
    fn details_mut(&mut self) -> &mut ProductDetails;

    fn update_inventory(&mut self, count: i64) {
        self.details_mut().inventory_count += count;
    }

    fn is_available(&self) -> bool {
        self.details().inventory_count > 0
    }

    fn as_shippable(&self) -> Option<&dyn Shippable> {
        None
    }
}

struct CatalogProduct {
    details: ProductDetails,
    weight: f64,
}

impl Product for CatalogProduct {
    fn details(&self) -> &ProductDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut ProductDetails {
        &mut self.details
    }

    fn as_shippable(&self) -> Option<&dyn Shippable> {
        Some(self)
    }
}

impl Shippable for CatalogProduct {
    fn shipping_cost(&self) -> f64 {
        let base_cost = 5.0;
        self.weight * 0.5 + base_cost
    }
}

#[derive(Debug, Clone)]
pub struct Tool {
    details: ProductDetails,
}

impl Product for Tool {
    fn details(&self) -> &ProductDetails {
        &self.details
    }

    fn details_mut(&mut self) -> &mut ProductDetails {
        &mut self.details
    }
}

impl ToolInfo for Tool {
    fn maintenance_schedule(&self) -> String {
        format!("Maintenance required every 6 months for {}.", self.details.name)
    }

    fn safety_guidelines(&self) -> String {
        format!(
            "Safety guidelines for {}:\n1. Wear safety goggles\n2. Keep out of reach of children",
            self.details.name
        )
    }
}

#[derive(Default)]
struct InventoryService {
    products: Vec<Box<dyn Product>>,
}

impl InventoryService {
    fn add_product(&mut self, product: Box<dyn Product>) {
        self.products.push(product);
    }

    fn find(&self, product_name: &str) -> Option<&dyn Product> {
        self.products
            .iter()
            .find(|p| p.details().name == product_name)
            .map(|p| p.as_ref())
    }

    fn update_product_inventory(&mut self, product_name: &str, count: i64) {
        if let Some(product) = self
            .products
            .iter_mut()
            .find(|p| p.details().name == product_name)
        {
            product.update_inventory(count);
        }
    }
}

#[derive(Default)]
pub struct Api {
    inventory_service: InventoryService,
}

impl InventoryApi for Api {
    type Tool = Tool;

    fn create_catalog_product(&mut self, name: &str, price: f64, inventory_count: i64, weight: f64) {
        let details = ProductDetails {
            name: name.to_string(),
            price,
            inventory_count,
        };
        self.inventory_service
            .add_product(Box::new(CatalogProduct { details, weight }));
    }

    fn create_tool(&mut self, name: &str, price: f64, inventory_count: i64) -> Tool {
        let tool = Tool {
            details: ProductDetails {
                name: name.to_string(),
                price,
                inventory_count,
            },
        };
        self.inventory_service.add_product(Box::new(tool.clone()));
        tool
    }

    fn update_inventory(&mut self, product_name: &str, count: i64) {
        self.inventory_service
            .update_product_inventory(product_name, count);
    }

    fn check_availability(&self, product_name: &str) -> bool {
        self.inventory_service
            .find(product_name)
            .is_some_and(|p| p.is_available())
    }

    fn get_shipping_cost(&self, product_name: &str) -> Option<f64> {
        let product = self.inventory_service.find(product_name)?;
        product.as_shippable().map(Shippable::shipping_cost)
    }

    fn get_price(&self, product_name: &str) -> Option<f64> {
        self.inventory_service
            .find(product_name)
            .map(|p| p.details().price)
    }
}
