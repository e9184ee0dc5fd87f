use super::spec_1::ShoppingCartApi;

struct PriceCalculator;

impl PriceCalculator {
    fn calculate_total_price_with_tax(&self, price: f64, tax_rate: f64) -> f64 {
        price * (1.0 + tax_rate)
    }
}

struct Item {
    #[allow(dead_code)]
    name: String,
    price: f64,
}

struct ShoppingCart {
    items: Vec<Item>,
    tax_rate: f64,
    price_calculator: PriceCalculator,
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            tax_rate: 0.2,
            price_calculator: PriceCalculator,
        }
    }
}

impl ShoppingCart {
    fn add_item(&mut self, name: &str, price: f64) {
        self.items.push(Item {
            name: name.to_string(),
            price,
        });
    }

    fn calculate_total(&self) -> f64 {
        self.items.iter().fold(0.0, |total, item| {
            total
                + self
                    .price_calculator
                    .calculate_total_price_with_tax(item.price, self.tax_rate)
        })
    }

    fn print_total(&self) -> String {
        format!("Total price with tax: ${:.2}", self.calculate_total())
    }
}

#[derive(Default)]
pub struct Api {
    shopping_cart: ShoppingCart,
}

impl ShoppingCartApi for Api {
    fn add_item_to_cart(&mut self, name: &str, price: f64) {
        self.shopping_cart.add_item(name, price);
    }

    fn get_total_price(&self) -> f64 {
        self.shopping_cart.calculate_total()
    }

    fn print_cart_total(&self) -> String {
        self.shopping_cart.print_total()
    }
}
