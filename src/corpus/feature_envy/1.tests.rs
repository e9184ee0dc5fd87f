use crate::core::spec::Spec;
use crate::{ensure, ensure_eq};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Product is not available in the desired quantity.")]
    NotAvailable,
    #[error("Product not found in cart.")]
    NotInCart,
}

pub trait StoreApi {
    fn add_product_to_inventory(&mut self, id: u32, name: &str, price: i64, stock: i64);
    /// Takes the quantity out of stock.
    fn add_to_cart(&mut self, product_id: u32, quantity: i64) -> Result<(), CartError>;
    fn update_cart_quantity(&mut self, product_id: u32, new_quantity: i64) -> Result<(), CartError>;
    fn calculate_total(&self) -> i64;
    /// One line per cart item followed by the total line.
    fn display_cart_contents(&self) -> Vec<String>;
}

pub fn spec<A: StoreApi + Default>() -> Spec<A> {
    Spec::<A>::new()
        .before_each(|api| {
            api.add_product_to_inventory(1, "Laptop", 1000, 5);
            api.add_product_to_inventory(2, "Smartphone", 500, 10);
        })
        .case("should add products to inventory and update stock correctly", |api| {
            api.add_product_to_inventory(3, "Tablet", 300, 20);

            api.add_to_cart(3, 5)?;
            ensure_eq!(api.calculate_total(), 1500);

            api.update_cart_quantity(3, 10)?;
            ensure_eq!(api.calculate_total(), 3000);
            Ok(())
        })
        .case("should add products to cart and calculate total correctly", |api| {
            api.add_to_cart(1, 2)?;
            api.add_to_cart(2, 3)?;

            ensure_eq!(api.calculate_total(), 3500);
            Ok(())
        })
        .case("should update product quantity in cart correctly", |api| {
            api.add_to_cart(1, 2)?;
            api.update_cart_quantity(1, 3)?;

            ensure_eq!(api.calculate_total(), 3000);
            Ok(())
        })
        .case("should display cart contents correctly", |api| {
            api.add_to_cart(1, 1)?;
            api.add_to_cart(2, 2)?;

            let lines = api.display_cart_contents();

            ensure!(lines.iter().any(|line| line.contains("Laptop")), "{:?}", lines);
            ensure!(lines.iter().any(|line| line.contains("Smartphone")), "{:?}", lines);
            ensure!(
                lines.iter().any(|line| line.contains("Total Cart Value: 2000")),
                "{:?}",
                lines
            );
            Ok(())
        })
        .case("should handle insufficient stock gracefully", |api| {
            let result = api.add_to_cart(1, 10);

            ensure_eq!(result, Err(CartError::NotAvailable));
            ensure_eq!(
                CartError::NotAvailable.to_string(),
                "Product is not available in the desired quantity."
            );
            ensure_eq!(api.calculate_total(), 0);
            Ok(())
        })
        .case("should reject quantity updates the stock cannot cover", |api| {
            ensure_eq!(api.update_cart_quantity(2, 1), Err(CartError::NotInCart));

            api.add_to_cart(1, 1)?;
            ensure_eq!(api.update_cart_quantity(1, 6), Err(CartError::NotAvailable));
            ensure_eq!(api.calculate_total(), 1000);
            Ok(())
        })
}
