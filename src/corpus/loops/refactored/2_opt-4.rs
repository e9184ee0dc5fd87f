use super::spec_2::BankApi;

struct BankAccount {
    #[allow(dead_code)]
    account_number: u32,
    balance: i64,
}

impl BankAccount {
    fn balance(&self) -> i64 {
        self.balance
    }
}

#[derive(Default)]
struct Bank {
    accounts: Vec<BankAccount>,
}

impl Bank {
    fn total_balance(&self) -> i64 {
        self.accounts.iter().map(BankAccount::balance).sum()
    }
}

#[derive(Default)]
pub struct Api {
    bank: Bank,
}

impl BankApi for Api {
    fn add_bank_account(&mut self, account_number: u32, balance: i64) {
        self.bank.accounts.push(BankAccount {
            account_number,
            balance,
        });
    }

    fn calculate_total_balance(&self) -> i64 {
        self.bank.total_balance()
    }
}
