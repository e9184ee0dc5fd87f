use super::spec_1::{CartError, StoreApi};

struct Product {
    id: u32,
    name: String,
    price: i64,
    stock: i64,
}

impl Product {
    fn update_stock(&mut self, quantity: i64) {
        self.stock += quantity;
    }

    fn is_available(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

#[derive(Default)]
struct ProductInventory {
    products: Vec<Product>,
}

impl ProductInventory {
    fn find_product_by_id(&self, product_id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    fn update_stock(&mut self, product_id: u32, quantity: i64) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
            product.update_stock(quantity);
        }
    }

    fn is_product_available(&self, product_id: u32, quantity: i64) -> bool {
        self.find_product_by_id(product_id)
            .is_some_and(|product| product.is_available(quantity))
    }

    fn product_price(&self, product_id: u32) -> i64 {
        self.find_product_by_id(product_id)
            .map_or(0, |product| product.price)
    }
}

struct CartItem {
    product_id: u32,
    quantity: i64,
}

#[derive(Default)]
struct CartManager {
    product_inventory: ProductInventory,
    cart: Vec<CartItem>,
}

impl CartManager {
    fn add_to_cart(&mut self, product_id: u32, quantity: i64) -> Result<(), CartError> {
        if !self.product_inventory.is_product_available(product_id, quantity) {
            return Err(CartError::NotAvailable);
        }

        match self.cart.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity += quantity,
            None => self.cart.push(CartItem {
                product_id,
                quantity,
            }),
        }
        self.product_inventory.update_stock(product_id, -quantity);
        Ok(())
    }

    fn update_quantity(&mut self, product_id: u32, new_quantity: i64) -> Result<(), CartError> {
        let item = self
            .cart
            .iter_mut()
            .find(|item| item.product_id == product_id)
            .ok_or(CartError::NotInCart)?;

        let difference = new_quantity - item.quantity;
        if !self.product_inventory.is_product_available(product_id, difference) {
            return Err(CartError::NotAvailable);
        }

        item.quantity = new_quantity;
        self.product_inventory.update_stock(product_id, -difference);
        Ok(())
    }

    fn calculate_total(&self) -> i64 {
        self.cart
            .iter()
            .map(|item| item.quantity * self.product_inventory.product_price(item.product_id))
            .sum()
    }

    fn display_cart_contents(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .cart
            .iter()
            .filter_map(|item| self.display_cart_item(item))
            .collect();
        lines.push(format!("Total Cart Value: {}", self.calculate_total()));
        lines
    }

    fn display_cart_item(&self, item: &CartItem) -> Option<String> {
        let product = self.product_inventory.find_product_by_id(item.product_id)?;
        Some(format!(
            "Product: {}, Quantity: {}, Price per item: {}",
            product.name, item.quantity, product.price
        ))
    }
}

#[derive(Default)]
pub struct Api {
    cart_manager: CartManager,
}

impl StoreApi for Api {
    fn add_product_to_inventory(&mut self, id: u32, name: &str, price: i64, stock: i64) {
        self.cart_manager.product_inventory.add_product(Product {
            id,
            name: name.to_string(),
            price,
            stock,
        });
    }

    fn add_to_cart(&mut self, product_id: u32, quantity: i64) -> Result<(), CartError> {
        self.cart_manager.add_to_cart(product_id, quantity)
    }

    fn update_cart_quantity(&mut self, product_id: u32, new_quantity: i64) -> Result<(), CartError> {
        self.cart_manager.update_quantity(product_id, new_quantity)
    }

    fn calculate_total(&self) -> i64 {
        self.cart_manager.calculate_total()
    }

    fn display_cart_contents(&self) -> Vec<String> {
        self.cart_manager.display_cart_contents()
    }
}
