use super::spec_1::{InventoryApi, ToolInfo};

const BASE_SHIPPING_COST: f64 = 5.0;

/// Everything a listed product gets for free. Tools inherit all of it.
trait Listed {
    fn product(&self) -> &CatalogProduct;
    fn product_mut(&mut self) -> &mut CatalogProduct;

    fn update_inventory(&mut self, count: i64) {
        self.product_mut().inventory_count += count;
    }

    fn is_available(&self) -> bool {
        self.product().inventory_count > 0
    }

    fn shipping_cost(&self) -> Option<f64> {
        self.product()
            .weight
            .map(|weight| weight * 0.5 + BASE_SHIPPING_COST)
    }
}

#[derive(Debug, Clone)]
struct CatalogProduct {
    name: String,
    price: f64,
    inventory_count: i64,
    weight: Option<f64>,
}

impl Listed for CatalogProduct {
    fn product(&self) -> &CatalogProduct {
        self
    }

    fn product_mut(&mut self) -> &mut CatalogProduct {
        self
    }
}

#[derive(Debug, Clone)]
pub struct Tool {
    parent: CatalogProduct,
}

impl Tool {
    fn new(name: &str, price: f64, inventory_count: i64) -> Self {
        Self {
            // Weight is irrelevant for tools
            parent: CatalogProduct {
                name: name.to_string(),
                price,
                inventory_count,
                weight: None,
            },
        }
    }
}

impl Listed for Tool {
    fn product(&self) -> &CatalogProduct {
        &self.parent
    }

    fn product_mut(&mut self) -> &mut CatalogProduct {
        &mut self.parent
    }

    // Tools are not sold.
    fn shipping_cost(&self) -> Option<f64> {
        None
    }
}

impl ToolInfo for Tool {
    fn maintenance_schedule(&self) -> String {
        format!("Maintenance required every 6 months for {}.", self.parent.name)
    }

    fn safety_guidelines(&self) -> String {
        format!(
            "Safety guidelines for {}:\n1. Wear safety goggles\n2. Keep out of reach of children",
            self.parent.name
        )
    }
}

#[derive(Default)]
struct InventoryService {
    products: Vec<Box<dyn Listed>>,
}

impl InventoryService {
    fn add_product(&mut self, product: Box<dyn Listed>) {
        self.products.push(product);
    }

    fn find(&self, product_name: &str) -> Option<&dyn Listed> {
        self.products
            .iter()
            .find(|p| p.product().name == product_name)
            .map(|p| p.as_ref())
    }

    fn update_product_inventory(&mut self, product_name: &str, count: i64) {
        if let Some(product) = self
            .products
            .iter_mut()
            .find(|p| p.product().name == product_name)
        {
            product.update_inventory(count);
        }
    }

    fn check_product_availability(&self, product_name: &str) -> bool {
        self.find(product_name).is_some_and(|p| p.is_available())
    }

    fn product_shipping_cost(&self, product_name: &str) -> Option<f64> {
        self.find(product_name)?.shipping_cost()
    }
}

#[derive(Default)]
pub struct Api {
    inventory_service: InventoryService,
}

impl InventoryApi for Api {
    type Tool = Tool;

    fn create_catalog_product(&mut self, name: &str, price: f64, inventory_count: i64, weight: f64) {
        self.inventory_service.add_product(Box::new(CatalogProduct {
            name: name.to_string(),
            price,
            inventory_count,
            weight: Some(weight),
        }));
    }

    fn create_tool(&mut self, name: &str, price: f64, inventory_count: i64) -> Tool {
        let tool = Tool::new(name, price, inventory_count);
        self.inventory_service.add_product(Box::new(tool.clone()));
        tool
    }

    fn update_inventory(&mut self, product_name: &str, count: i64) {
        self.inventory_service
            .update_product_inventory(product_name, count);
    }

    fn check_availability(&self, product_name: &str) -> bool {
        self.inventory_service
            .check_product_availability(product_name)
    }

    fn get_shipping_cost(&self, product_name: &str) -> Option<f64> {
        self.inventory_service.product_shipping_cost(product_name)
    }

    fn get_price(&self, product_name: &str) -> Option<f64> {
        self.inventory_service
            .find(product_name)
            .map(|p| p.product().price)
    }
}
