use super::spec_2::AccountsApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountType {
    Savings,
    Checking,
    Business,
    Basic,
}

impl From<&str> for AccountType {
    fn from(name: &str) -> Self {
        match name {
            "savings" => Self::Savings,
            "checking" => Self::Checking,
            "business" => Self::Business,
            _ => Self::Basic,
        }
    }
}

impl AccountType {
    fn features(self) -> Vec<String> {
        let features: &[&str] = match self {
            Self::Savings => &["Interest Accumulation", "Limited Withdrawals"],
            Self::Checking => &["Unlimited Transactions", "Overdraft Protection"],
            Self::Business => &["Higher Withdrawal Limits", "Business Loans"],
            Self::Basic => &["Basic Features"],
        };
        features.iter().map(|f| f.to_string()).collect()
    }

    fn label(self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Checking => "Checking",
            Self::Business => "Business",
            Self::Basic => "General",
        }
    }

    fn generate_report(self, account_number: &str, balance: i64) -> String {
        format!(
            "{} Account Report for {}: Balance is ${}",
            self.label(),
            account_number,
            balance
        )
    }
}

struct Account {
    account_number: String,
    account_type: AccountType,
    balance: i64,
}

impl Account {
    fn generate_report(&self) -> String {
        self.account_type
            .generate_report(&self.account_number, self.balance)
    }
}

#[derive(Default)]
struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
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

#[derive(Default)]
pub struct Api {
    bank: Bank,
}

impl AccountsApi for Api {
    fn create_account(&mut self, account_number: &str, account_type: &str, balance: i64) {
        self.bank.accounts.push(Account {
            account_number: account_number.to_string(),
            account_type: AccountType::from(account_type),
            balance,
        });
    }

    fn deposit(&mut self, account_number: &str, amount: i64) {
        if let Some(account) = self.bank.account_mut(account_number) {
            account.balance += amount;
        }
    }

    fn withdraw(&mut self, account_number: &str, amount: i64) {
        if let Some(account) = self.bank.account_mut(account_number) {
            account.balance -= amount;
        }
    }

    fn get_account_features(&self, account_number: &str) -> Option<Vec<String>> {
        self.bank
            .account(account_number)
            .map(|account| account.account_type.features())
    }

    fn generate_report(&self) -> Vec<String> {
        self.bank
            .accounts
            .iter()
            .map(Account::generate_report)
            .collect()
    }

    fn get_balance(&self, account_number: &str) -> Option<i64> {
        self.bank
            .account(account_number)
            .map(|account| account.balance)
    }
}
