use crate::core::spec::Spec;
use crate::ensure_eq;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl CustomerDetails {
    pub fn new(name: &str, email: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            address: address.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: u32,
    pub quantity: u32,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Product not found")]
    ProductNotFound,
    #[error("Not enough stock")]
    NotEnoughStock,
    #[error("Product not in cart")]
    NotInCart,
}

pub trait CartApi {
    fn add_to_cart(
        &mut self,
        product_id: u32,
        quantity: u32,
        customer: &CustomerDetails,
    ) -> Result<(), CartError>;

    fn remove_from_cart(
        &mut self,
        product_id: u32,
        quantity: u32,
        customer: &CustomerDetails,
    ) -> Result<(), CartError>;

    /// Creates an empty cart the first time a customer is seen.
    fn get_cart(&mut self, customer: &CustomerDetails) -> Cart;
}

fn item(product_id: u32, quantity: u32) -> CartItem {
    CartItem {
        product_id,
        quantity,
        price: 10,
    }
}

fn john() -> CustomerDetails {
    CustomerDetails::new("John Doe", "john@example.com", "123 Main St")
}

fn jane() -> CustomerDetails {
    CustomerDetails::new("Jane Doe", "jane@example.com", "456 Elm St")
}

pub fn spec<A: CartApi + Default>() -> Spec<A> {
    Spec::<A>::new()
        .case("should add a product to the cart successfully", |api| {
            api.add_to_cart(1, 2, &john())?;

            let cart = api.get_cart(&john());

            ensure_eq!(cart.items, vec![item(1, 2)]);
            Ok(())
        })
        .case("should remove a product from the cart successfully", |api| {
            api.add_to_cart(1, 2, &jane())?;
            api.remove_from_cart(1, 1, &jane())?;

            let cart = api.get_cart(&jane());

            ensure_eq!(cart.items, vec![item(1, 1)]);
            Ok(())
        })
        .case(
            "should remove a product completely from the cart when quantity is equal or less",
            |api| {
                api.add_to_cart(1, 2, &jane())?;
                api.remove_from_cart(1, 2, &jane())?;

                let cart = api.get_cart(&jane());

                ensure_eq!(cart.items.len(), 0);
                Ok(())
            },
        )
        .case("should return the correct cart for a customer", |api| {
            api.add_to_cart(1, 2, &john())?;
            api.add_to_cart(2, 1, &jane())?;

            let cart1 = api.get_cart(&john());
            let cart2 = api.get_cart(&jane());

            ensure_eq!(cart1.items, vec![item(1, 2)]);
            ensure_eq!(cart1.customer_email, "john@example.com");
            ensure_eq!(cart2.items, vec![item(2, 1)]);
            ensure_eq!(cart2.customer_address, "456 Elm St");
            Ok(())
        })
        .case("should reject removing a product that is not in the cart", |api| {
            ensure_eq!(
                api.remove_from_cart(7, 1, &john()),
                Err(CartError::NotInCart)
            );
            ensure_eq!(api.add_to_cart(1, 101, &john()), Err(CartError::NotEnoughStock));
            Ok(())
        })
}
