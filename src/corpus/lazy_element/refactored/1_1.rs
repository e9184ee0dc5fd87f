use super::spec_1::ShoppingCartApi;

#[derive(Debug, Clone, Copy)]
struct Price(f64);

impl Price {
    fn with_tax(self, tax_rate: f64) -> Price {
        Price(self.0 * (1.0 + tax_rate))
    }

    fn amount(self) -> f64 {
        self.0
    }
}

struct Item {
    #[allow(dead_code)]
    name: String,
    price: Price,
}

impl Item {
    fn price_with_tax(&self, tax_rate: f64) -> f64 {
        self.price.with_tax(tax_rate).amount()
    }
}

struct ShoppingCart {
    items: Vec<Item>,
    tax_rate: f64,
}

impl ShoppingCart {
    fn new(tax_rate: f64) -> Self {
        Self {
            items: Vec::new(),
            tax_rate,
        }
    }

    fn add_item(&mut self, name: &str, price: f64) {
        self.items.push(Item {
            name: name.to_string(),
            price: Price(price),
        });
    }

    fn calculate_total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price_with_tax(self.tax_rate))
            .sum()
    }

    fn print_total(&self) -> String {
        format!("Total price with tax: ${:.2}", self.calculate_total())
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
        self.shopping_cart.calculate_total()
    }

    fn print_cart_total(&self) -> String {
        self.shopping_cart.print_total()
    }
}
