use super::spec_1::{Cart, CartApi, CartError, CartItem, CustomerDetails};
use std::collections::HashMap;

struct Customer {
    name: String,
    email: String,
    address: String,
}

impl Customer {
    fn key(&self) -> String {
        format!("{}_{}_{}", self.name, self.email, self.address)
    }
}

impl From<&CustomerDetails> for Customer {
    fn from(details: &CustomerDetails) -> Self {
        Self {
            name: details.name.clone(),
            email: details.email.clone(),
            address: details.address.clone(),
        }
    }
}

struct Product {
    price: u32,
    stock: u32,
}

#[derive(Default)]
struct CartModule {
    carts: HashMap<String, Cart>,
}

impl CartModule {
    fn add_to_cart(
        &mut self,
        product_id: u32,
        quantity: u32,
        customer: &Customer,
    ) -> Result<(), CartError> {
        let product = Self::get_product_by_id(product_id).ok_or(CartError::ProductNotFound)?;
        if product.stock < quantity {
            return Err(CartError::NotEnoughStock);
        }

        self.get_cart_for_customer(customer).items.push(CartItem {
            product_id,
            quantity,
            price: product.price,
        });
        Ok(())
    }

    fn remove_from_cart(
        &mut self,
        product_id: u32,
        quantity: u32,
        customer: &Customer,
    ) -> Result<(), CartError> {
        let cart = self.get_cart_for_customer(customer);
        let index = cart
            .items
            .iter()
            .position(|item| item.product_id == product_id)
            .ok_or(CartError::NotInCart)?;

        if cart.items[index].quantity <= quantity {
            cart.items.remove(index);
        } else {
            cart.items[index].quantity -= quantity;
        }
        Ok(())
    }

    fn get_cart_for_customer(&mut self, customer: &Customer) -> &mut Cart {
        self.carts.entry(customer.key()).or_insert_with(|| Cart {
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            customer_address: customer.address.clone(),
            items: Vec::new(),
        })
    }

    fn get_product_by_id(_product_id: u32) -> Option<Product> {
        Some(Product {
            price: 10,
            stock: 100,
        })
    }
}

#[derive(Default)]
pub struct Api {
    cart_module: CartModule,
}

impl CartApi for Api {
    fn add_to_cart(
        &mut self,
        product_id: u32,
        quantity: u32,
        customer: &CustomerDetails,
    ) -> Result<(), CartError> {
        self.cart_module
            .add_to_cart(product_id, quantity, &Customer::from(customer))
    }

    fn remove_from_cart(
        &mut self,
        product_id: u32,
        quantity: u32,
        customer: &CustomerDetails,
    ) -> Result<(), CartError> {
        self.cart_module
            .remove_from_cart(product_id, quantity, &Customer::from(customer))
    }

    fn get_cart(&mut self, customer: &CustomerDetails) -> Cart {
        self.cart_module
            .get_cart_for_customer(&Customer::from(customer))
            .clone()
    }
}
