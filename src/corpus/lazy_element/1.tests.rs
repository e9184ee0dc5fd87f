use crate::core::spec::Spec;
use crate::{ensure_close, ensure_eq};

pub trait ShoppingCartApi {
    fn add_item_to_cart(&mut self, name: &str, price: f64);
    /// Sum of all item prices with 20% tax applied.
    fn get_total_price(&self) -> f64;
    fn print_cart_total(&self) -> String;
}

pub fn spec<A: ShoppingCartApi + Default>() -> Spec<A> {
    Spec::<A>::new()
        .case("should add item to cart and calculate total price with tax", |api| {
            api.add_item_to_cart("Laptop", 1000.0);
            api.add_item_to_cart("Phone", 500.0);

            ensure_close!(api.get_total_price(), 1800.0);
            Ok(())
        })
        .case("should print total price correctly", |api| {
            api.add_item_to_cart("Laptop", 1000.0);
            api.add_item_to_cart("Phone", 500.0);

            ensure_eq!(api.print_cart_total(), "Total price with tax: $1800.00");
            Ok(())
        })
        .case("should handle empty cart", |api| {
            ensure_eq!(api.get_total_price(), 0.0);
            Ok(())
        })
        .case("should add multiple items and calculate total price", |api| {
            api.add_item_to_cart("Laptop", 1000.0);
            api.add_item_to_cart("Phone", 500.0);
            api.add_item_to_cart("Headphones", 200.0);

            ensure_close!(api.get_total_price(), 2040.0);
            Ok(())
        })
}
