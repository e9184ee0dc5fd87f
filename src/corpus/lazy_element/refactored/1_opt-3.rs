use super::spec_1::ShoppingCartApi;

#[derive(Debug, Clone, Copy)]
struct TaxRate(f64);

impl TaxRate {
    fn apply(self, price: f64) -> f64 {
        price * (1.0 + self.0)
    }
}

struct ShoppingCart {
    prices: Vec<f64>,
    tax_rate: TaxRate,
}

impl ShoppingCart {
    fn new(tax_rate: f64) -> Self {
        Self {
            prices: Vec::new(),
            tax_rate: TaxRate(tax_rate),
        }
    }

    fn add_item(&mut self, _name: &str, price: f64) {
        self.prices.push(price);
    }

    fn calculate_total_price(&self) -> f64 {
        self.prices.iter().map(|&price| self.tax_rate.apply(price)).sum()
    }

    fn print_total_price(&self) -> String {
        format!("Total price with tax: ${:.2}", self.calculate_total_price())
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
        self.shopping_cart.calculate_total_price()
    }

    fn print_cart_total(&self) -> String {
        self.shopping_cart.print_total_price()
    }
}
