#![allow(clippy::needless_range_loop)]

use super::spec_2::BankApi;

struct BankAccount {
    #[allow(dead_code)]
    account_number: u32,
    balance: i64,
}

#[derive(Default)]
struct Bank {
    accounts: Vec<BankAccount>,
}

impl Bank {
    fn add_account(&mut self, account: BankAccount) {
        self.accounts.push(account);
    }

    fn total_balance(&self) -> i64 {
        let mut total_balance = 0;
        for i in 0..self.accounts.len() {
            total_balance += self.accounts[i].balance;
        }
        total_balance
    }
}

#[derive(Default)]
pub struct Api {
    bank: Bank,
}

impl BankApi for Api {
    fn add_bank_account(&mut self, account_number: u32, balance: i64) {
        self.bank.add_account(BankAccount {
            account_number,
            balance,
        });
    }

    fn calculate_total_balance(&self) -> i64 {
        self.bank.total_balance()
    }
}
