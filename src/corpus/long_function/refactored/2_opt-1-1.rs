use super::spec_2::{AccountDetails, BankApi, TransactionLog};
use chrono::Utc;

struct Account {
    account_id: u32,
    owner: String,
    balance: i64,
}

impl Account {
    fn deduct(&mut self, amount: i64) {
        self.balance -= amount;
    }

    fn add(&mut self, amount: i64) {
        self.balance += amount;
    }
}

struct Bank {
    accounts: Vec<Account>,
    transaction_logs: Vec<TransactionLog>,
}

impl Default for Bank {
    fn default() -> Self {
        let account = |account_id, owner: &str, balance| Account {
            account_id,
            owner: owner.to_string(),
            balance,
        };

        Self {
            accounts: vec![account(1, "Alice", 1000), account(2, "Bob", 500)],
            transaction_logs: Vec::new(),
        }
    }
}

impl Bank {
    fn find_account(&self, account_id: u32) -> Option<usize> {
        self.accounts
            .iter()
            .position(|acc| acc.account_id == account_id)
    }

    fn log_transaction(&mut self, from: u32, to: u32, amount: i64) {
        self.transaction_logs.push(TransactionLog {
            from,
            to,
            amount,
            date: Utc::now(),
        });
    }

    fn perform_transaction(&mut self, sender_id: u32, receiver_id: u32, amount: i64) -> bool {
        let (Some(sender), Some(receiver)) =
            (self.find_account(sender_id), self.find_account(receiver_id))
        else {
            tracing::debug!("Sender or receiver account not found.");
            return false;
        };

        if self.accounts[sender].balance < amount {
            tracing::debug!("Insufficient balance in sender's account.");
            return false;
        }

        self.accounts[sender].deduct(amount);
        self.accounts[receiver].add(amount);

        tracing::debug!(
            "Transaction complete: {} to {}, Amount: ${}",
            self.accounts[sender].owner,
            self.accounts[receiver].owner,
            amount
        );
        self.log_transaction(sender_id, receiver_id, amount);

        true
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
        let account = &self.bank.accounts[self.bank.find_account(account_id)?];
        Some(AccountDetails {
            account_id: account.account_id,
            owner: account.owner.clone(),
            balance: account.balance,
        })
    }
}
