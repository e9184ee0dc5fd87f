use crate::core::spec::Spec;
use crate::{ensure, ensure_close, ensure_eq};

pub trait ToolInfo {
    fn maintenance_schedule(&self) -> String;
    fn safety_guidelines(&self) -> String;
}

pub trait InventoryApi {
    type Tool: ToolInfo;

    fn create_catalog_product(&mut self, name: &str, price: f64, inventory_count: i64, weight: f64);
    fn create_tool(&mut self, name: &str, price: f64, inventory_count: i64) -> Self::Tool;
    fn update_inventory(&mut self, product_name: &str, count: i64);
    fn check_availability(&self, product_name: &str) -> bool;
    /// `None` for tools and unknown products.
    fn get_shipping_cost(&self, product_name: &str) -> Option<f64>;
    fn get_price(&self, product_name: &str) -> Option<f64>;
}

pub fn spec<A: InventoryApi + Default>() -> Spec<A> {
    Spec::<A>::new()
        .case("should add and check availability of a catalog product", |api| {
            api.create_catalog_product("Laptop", 1500.0, 10, 2.0);

            ensure!(api.check_availability("Laptop"));
            Ok(())
        })
        .case("should update inventory and check availability of a catalog product", |api| {
            api.create_catalog_product("Smartphone", 800.0, 5, 0.5);

            api.update_inventory("Smartphone", -5);

            ensure!(!api.check_availability("Smartphone"));
            Ok(())
        })
        .case("should get the shipping cost of a catalog product", |api| {
            api.create_catalog_product("Tablet", 300.0, 20, 1.0);

            let cost = api.get_shipping_cost("Tablet");

            ensure!(cost.is_some(), "no shipping cost for Tablet");
            ensure_close!(cost.unwrap_or_default(), 5.5);
            Ok(())
        })
        .case("should add and check availability of a tool", |api| {
            api.create_tool("Hammer", 20.0, 15);

            ensure!(api.check_availability("Hammer"));
            ensure_eq!(api.get_shipping_cost("Hammer"), None);
            Ok(())
        })
        .case("should get the maintenance schedule of a tool", |api| {
            let tool = api.create_tool("Drill", 100.0, 5);

            ensure_eq!(
                tool.maintenance_schedule(),
                "Maintenance required every 6 months for Drill."
            );
            Ok(())
        })
        .case("should get the safety guidelines of a tool", |api| {
            let tool = api.create_tool("Chainsaw", 150.0, 2);

            ensure_eq!(
                tool.safety_guidelines(),
                "Safety guidelines for Chainsaw:\n1. Wear safety goggles\n2. Keep out of reach of children"
            );
            Ok(())
        })
        .case("should keep the listed price of every product", |api| {
            api.create_catalog_product("Laptop", 1500.0, 10, 2.0);
            api.create_tool("Hammer", 20.0, 15);

            ensure_eq!(api.get_price("Laptop"), Some(1500.0));
            ensure_eq!(api.get_price("Hammer"), Some(20.0));
            ensure_eq!(api.get_price("Kettle"), None);
            ensure!(!api.check_availability("Kettle"));
            Ok(())
        })
}
