use super::spec_2::AccountsApi;

struct Account {
    account_number: String,
    account_type: String,
    balance: i64,
    features: Vec<String>,
}

impl Account {
    fn new(account_number: &str, account_type: &str, balance: i64) -> Self {
        let mut account = Self {
            account_number: account_number.to_string(),
            account_type: account_type.to_string(),
            balance,
            features: Vec::new(),
        };
        account.features = account.features();
        account
    }

    fn deposit(&mut self, amount: i64) {
        self.balance += amount;
    }

    fn withdraw(&mut self, amount: i64) {
        self.balance -= amount;
    }

    fn balance(&self) -> i64 {
        self.balance
    }

    fn features(&self) -> Vec<String> {
        let features: &[&str] = match self.account_type.as_str() {
            "savings" => &["Interest Accumulation", "Limited Withdrawals"],
            "checking" => &["Unlimited Transactions", "Overdraft Protection"],
            "business" => &["Higher Withdrawal Limits", "Business Loans"],
            _ => &["Basic Features"],
        };
        features.iter().map(|f| f.to_string()).collect()
    }
}

#[derive(Default)]
struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    fn account(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|acc| acc.account_number == account_number)
    }

    fn account_mut(&mut self, account_number: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|acc| acc.account_number == account_number)
    }

    fn generate_report(&self) -> Vec<String> {
        self.accounts
            .iter()
            .map(|account| match account.account_type.as_str() {
                "savings" => format!(
                    "Savings Account Report for {}: Balance is ${}",
                    account.account_number,
                    account.balance()
                ),
                "checking" => format!(
                    "Checking Account Report for {}: Balance is ${}",
                    account.account_number,
                    account.balance()
                ),
                "business" => format!(
                    "Business Account Report for {}: Balance is ${}",
                    account.account_number,
                    account.balance()
                ),
                _ => format!(
                    "General Account Report for {}: Balance is ${}",
                    account.account_number,
                    account.balance()
                ),
            })
            .collect()
    }
}

#[derive(Default)]
pub struct Api {
    bank: Bank,
}

impl AccountsApi for Api {
    fn create_account(&mut self, account_number: &str, account_type: &str, balance: i64) {
        self.bank
            .add_account(Account::new(account_number, account_type, balance));
    }

    fn deposit(&mut self, account_number: &str, amount: i64) {
        if let Some(account) = self.bank.account_mut(account_number) {
            account.deposit(amount);
        }
    }

    fn withdraw(&mut self, account_number: &str, amount: i64) {
        if let Some(account) = self.bank.account_mut(account_number) {
            account.withdraw(amount);
        }
    }

    fn get_account_features(&self, account_number: &str) -> Option<Vec<String>> {
        self.bank
            .account(account_number)
            .map(|account| account.features.clone())
    }

    fn generate_report(&self) -> Vec<String> {
        self.bank.generate_report()
    }

    fn get_balance(&self, account_number: &str) -> Option<i64> {
        self.bank.account(account_number).map(Account::balance)
    }
}
