use super::spec_2::{AccountDetails, BankApi, TransactionLog};
use chrono::Utc;

struct Account {
    account_id: u32,
    owner: String,
    balance: i64,
}

impl Account {
    fn new(account_id: u32, owner: &str, balance: i64) -> Self {
        Self {
            account_id,
            owner: owner.to_string(),
            balance,
        }
    }

    fn deduct(&mut self, amount: i64) {
        self.balance -= amount;
    }

    fn add(&mut self, amount: i64) {
        self.balance += amount;
    }

    fn details(&self) -> AccountDetails {
        AccountDetails {
            account_id: self.account_id,
            owner: self.owner.clone(),
            balance: self.balance,
        }
    }
}

struct Bank {
    accounts: Vec<Account>,
    transaction_logs: Vec<TransactionLog>,
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            accounts: vec![Account::new(1, "Alice", 1000), Account::new(2, "Bob", 500)],
            transaction_logs: Vec::new(),
        }
    }
}

impl Bank {
    fn perform_transaction(&mut self, sender_id: u32, receiver_id: u32, amount: i64) -> bool {
        // Verify sender account
        let Some(sender) = self.accounts.iter().position(|acc| acc.account_id == sender_id) else {
            tracing::debug!("Sender account not found.");
            return false;
        };

        // Verify receiver account
        let Some(receiver) = self
            .accounts
            .iter()
            .position(|acc| acc.account_id == receiver_id)
        else {
            tracing::debug!("Receiver account not found.");
            return false;
        };

        // Check if sender has sufficient balance
        if self.accounts[sender].balance < amount {
            tracing::debug!("Insufficient balance in sender's account.");
            return false;
        }

        // Move the money
        self.accounts[sender].deduct(amount);
        self.accounts[receiver].add(amount);

        tracing::debug!(
            "Transaction complete: {} to {}, Amount: ${}",
            self.accounts[sender].owner,
            self.accounts[receiver].owner,
            amount
        );

        // Save to the log
        self.transaction_logs.push(TransactionLog {
            from: self.accounts[sender].account_id,
            to: self.accounts[receiver].account_id,
            amount,
            date: Utc::now(),
        });

        true
    }

    fn account_details(&self, account_id: u32) -> Option<AccountDetails> {
        self.accounts
            .iter()
            .find(|acc| acc.account_id == account_id)
            .map(Account::details)
    }
}

#[derive(Default)]
pub struct Api {
    bank: Bank,
}

impl BankApi for Api {
    fn perform_transaction(&mut self, sender_id: u32, receiver_id: u32, amount: i64) -> bool {
        self.bank.perform_transaction(sender_id, receiver_id, amount)
    }

    fn get_transaction_logs(&self) -> &[TransactionLog] {
        &self.bank.transaction_logs
    }

    fn get_account_details(&self, account_id: u32) -> Option<AccountDetails> {
        self.bank.account_details(account_id)
    }
}
