use super::spec_1::{Cart, CartApi, CartError, CartItem, CustomerDetails};
use std::collections::HashMap;

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
        customer_name: &str,
        customer_email: &str,
        customer_address: &str,
    ) -> Result<(), CartError> {
        let product = Self::get_product_by_id(product_id).ok_or(CartError::ProductNotFound)?;
        if product.stock < quantity {
            return Err(CartError::NotEnoughStock);
        }

        let cart = self.get_cart_for_customer(customer_name, customer_email, customer_address);
        cart.items.push(CartItem {
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
        customer_name: &str,
        customer_email: &str,
        customer_address: &str,
    ) -> Result<(), CartError> {
        let cart = self.get_cart_for_customer(customer_name, customer_email, customer_address);
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

    fn get_cart_for_customer(
        &mut self,
        customer_name: &str,
        customer_email: &str,
        customer_address: &str,
    ) -> &mut Cart {
        let key = format!("{}_{}_{}", customer_name, customer_email, customer_address);
        self.carts.entry(key).or_insert_with(|| Cart {
            customer_name: customer_name.to_string(),
            customer_email: customer_email.to_string(),
            customer_address: customer_address.to_string(),
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
        let CustomerDetails {
            name,
            email,
            address,
        } = customer;
        self.cart_module
            .add_to_cart(product_id, quantity, name, email, address)
    }

    fn remove_from_cart(
        &mut self,
        product_id: u32,
        quantity: u32,
        customer: &CustomerDetails,
    ) -> Result<(), CartError> {
        let CustomerDetails {
            name,
            email,
            address,
        } = customer;
        self.cart_module
            .remove_from_cart(product_id, quantity, name, email, address)
    }

    fn get_cart(&mut self, customer: &CustomerDetails) -> Cart {
        let CustomerDetails {
            name,
            email,
            address,
        } = customer;
        self.cart_module
            .get_cart_for_customer(name, email, address)
            .clone()
    }
}
