use super::spec_1::{InventoryApi, ToolInfo};

#[derive(Debug, Clone)]
struct ProductDetails {
    name: String,
    price: f64,
    inventory_count: i64,
}

#[derive(Debug, Clone)]
struct CatalogProduct {
    details: ProductDetails,
    weight: f64,
}

impl CatalogProduct {
    fn shipping_cost(&self) -> f64 {
        let base_cost = 5.0;
        self.weight * 0.5 + base_cost
    }
}

#[derive(Debug, Clone)]
pub struct Tool {
    details: ProductDetails,
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

enum InventoryItem {
    Catalog(CatalogProduct),
    Tool(Tool),
}

impl InventoryItem {
    fn details(&self) -> &ProductDetails {
        match self {
            Self::Catalog(product) => &product.details,
            Self::Tool(tool) => &tool.details,
        }
    }

    fn details_mut(&mut self) -> &mut ProductDetails {
        match self {
            Self::Catalog(product) => &mut product.details,
            Self::Tool(tool) => &mut tool.details,
        }
    }

    fn update_inventory(&mut self, count: i64) {
        self.details_mut().inventory_count += count;
    }

    fn is_available(&self) -> bool {
        self.details().inventory_count > 0
    }
}

#[derive(Default)]
struct InventoryService {
    products: Vec<InventoryItem>,
}

impl InventoryService {
    fn find(&self, product_name: &str) -> Option<&InventoryItem> {
        self.products
            .iter()
            .find(|p| p.details().name == product_name)
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

    fn product_shipping_cost(&self, product_name: &str) -> Option<f64> {
        match self.find(product_name)? {
            InventoryItem::Catalog(product) => Some(product.shipping_cost()),
            InventoryItem::Tool(_) => None,
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
            .products
            .push(InventoryItem::Catalog(CatalogProduct { details, weight }));
    }

    fn create_tool(&mut self, name: &str, price: f64, inventory_count: i64) -> Tool {
        let tool = Tool {
            details: ProductDetails {
                name: name.to_string(),
                price,
                inventory_count,
            },
        };
        self.inventory_service
            .products
            .push(InventoryItem::Tool(tool.clone()));
        tool
    }

    fn update_inventory(&mut self, product_name: &str, count: i64) {
        self.inventory_service
            .update_product_inventory(product_name, count);
    }

    fn check_availability(&self, product_name: &str) -> bool {
        self.inventory_service
            .find(product_name)
            .is_some_and(InventoryItem::is_available)
    }

    fn get_shipping_cost(&self, product_name: &str) -> Option<f64> {
        self.inventory_service.product_shipping_cost(product_name)
    }

    fn get_price(&self, product_name: &str) -> Option<f64> {
        self.inventory_service
            .find(product_name)
            .map(|p| p.details().price)
    }
}
