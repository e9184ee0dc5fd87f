use super::spec_1::ShoppingCartApi;

struct PriceCalculator;

impl PriceCalculator {
    fn calculate_total_price_with_tax(&self, price: f64, tax_rate: f64) -> f64 {
        price * (1.0 + tax_rate)
    }
}

struct ShoppingCart {
    items: Vec<(String, f64)>,
    tax_rate: f64,
    price_calculator: PriceCalculator,
}

impl ShoppingCart {
    fn new(tax_rate: f64) -> Self {
        Self {
            items: Vec::new(),
            tax_rate,
            price_calculator: PriceCalculator,
        }
    }

    fn add_item(&mut self, name: &str, price: f64) {
        self.items.push((name.to_string(), price));
    }

    fn calculate_total(&self) -> f64 {
        self.items
            .iter()
            .map(|(_, price)| {
                self.price_calculator
                    .calculate_total_price_with_tax(*price, self.tax_rate)
            })
            .sum()
    }

    fn total_price_with_tax(&self) -> f64 {
        self.calculate_total()
    }

    fn print_total_price(&self) -> String {
        format!("Total price with tax: ${:.2}", self.total_price_with_tax())
    }
}

pub struct Api {
    shopping_cart: ShoppingCart,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            shopping_cart: ShoppingCart::new(0.2),
        }
    }
}

impl ShoppingCartApi for Api {
    fn add_item_to_cart(&mut self, name: &str, price: f64) {
        self.shopping_cart.add_item(name, price);
    }

    fn get_total_price(&self) -> f64 {
        self.shopping_cart.total_price_with_tax()
    }

    fn print_cart_total(&self) -> String {
        self.shopping_cart.print_total_price()
    }
}
