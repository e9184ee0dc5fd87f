use super::spec_2::AccountsApi;

trait AccountType {
    fn features(&self) -> Vec<String>;
    fn generate_report(&self, account: &Account) -> String;
}

struct SavingsAccountType;
struct CheckingAccountType;
struct BusinessAccountType;
struct BasicAccountType;

impl AccountType for SavingsAccountType {
    fn features(&self) -> Vec<String> {
        vec![
            "Interest Accumulation".to_string(),
            "Limited Withdrawals".to_string(),
        ]
    }

    fn generate_report(&self, account: &Account) -> String {
        format!(
            "Savings Account Report for {}: Balance is ${}",
            account.account_number, account.balance
        )
    }
}

impl AccountType for CheckingAccountType {
    fn features(&self) -> Vec<String> {
        vec![
            "Unlimited Transactions".to_string(),
            "Overdraft Protection".to_string(),
        ]
    }

    fn generate_report(&self, account: &Account) -> String {
        format!(
            "Checking Account Report for {}: Balance is ${}",
            account.account_number, account.balance
        )
    }
}

impl AccountType for BusinessAccountType {
    fn features(&self) -> Vec<String> {
        vec![
            "Higher Withdrawal Limits".to_string(),
            "Business Loans".to_string(),
        ]
    }

    fn generate_report(&self, account: &Account) -> String {
        format!(
            "Business Account Report for {}: Balance is ${}",
            account.account_number, account.balance
        )
    }
}

impl AccountType for BasicAccountType {
    fn features(&self) -> Vec<String> {
        vec!["Basic Features".to_string()]
    }

    fn generate_report(&self, account: &Account) -> String {
        format!(
            "General Account Report for {}: Balance is ${}",
            account.account_number, account.balance
        )
    }
}

fn account_type_for(name: &str) -> Box<dyn AccountType> {
    match name {
        "savings" => Box::new(SavingsAccountType),
        "checking" => Box::new(CheckingAccountType),
        "business" => Box::new(BusinessAccountType),
        _ => Box::new(BasicAccountType),
    }
}

struct Account {
    account_number: String,
    account_type: Box<dyn AccountType>,
    balance: i64,
}

impl Account {
    fn generate_report(&self) -> String {
        self.account_type.generate_report(self)
    }
}

#[derive(Default)]
pub struct Api {
    accounts: Vec<Account>,
}

impl Api {
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
}

impl AccountsApi for Api {
    fn create_account(&mut self, account_number: &str, account_type: &str, balance: i64) {
        self.accounts.push(Account {
            account_number: account_number.to_string(),
            account_type: account_type_for(account_type),
            balance,
        });
    }

    fn deposit(&mut self, account_number: &str, amount: i64) {
        if let Some(account) = self.account_mut(account_number) {
            account.balance += amount;
        }
    }

    fn withdraw(&mut self, account_number: &str, amount: i64) {
        if let Some(account) = self.account_mut(account_number) {
            account.balance -= amount;
        }
    }

    fn get_account_features(&self, account_number: &str) -> Option<Vec<String>> {
        self.account(account_number)
            .map(|account| account.account_type.features())
    }

    fn generate_report(&self) -> Vec<String> {
        self.accounts.iter().map(Account::generate_report).collect()
    }

    fn get_balance(&self, account_number: &str) -> Option<i64> {
        self.account(account_number).map(|account| account.balance)
    }
}
